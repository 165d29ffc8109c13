//! Class names and fixed navigation shared by every page. Styling itself lives in
//! the stylesheet the backend serves.

pub(crate) const SITE_TITLE: &str = "Finn";

pub(crate) const DATATABLE: &str = "datatable";
pub(crate) const LOAD_ERROR: &str = "loaderror";
pub(crate) const NOT_FOUND: &str = "notfound";
pub(crate) const NAVITEM: &str = "navitem";

/// Entity index pages listed in the sidebar, in display order.
pub(crate) const SIDEBAR_LINKS: &[(&str, &str)] = &[
    ("Institutions", "/institutions"),
    ("Accounts", "/accounts"),
    ("Categories", "/categories"),
    ("Projects", "/projects"),
];

pub(crate) const TOTAL_LABEL: &str = "T O T A L";
