use url::form_urlencoded;

use crate::backend::Backend;
use crate::ui::html::Markup;
use crate::ui::render;
use crate::ui::screens::accounts::{AccountBlock, AccountsListBlock};
use crate::ui::screens::categories::CategoryBlock;
use crate::ui::state::{Mount, MountToken};

/// Ordered component props. Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Props(Vec<(String, String)>);

impl Props {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The integer `id` prop, if there is one.
    pub(crate) fn id(&self) -> Option<i64> {
        self.get("id").and_then(|v| v.parse().ok())
    }

    /// Fold a raw query string (`a=1&b=two%20words`) into props.
    /// Pairs without `=` become empty values; pairs with an empty key are skipped.
    pub(crate) fn from_query_string(query: &str) -> Self {
        let mut props = Props::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            if k.is_empty() {
                tracing::debug!(value = %v, "skipping query pair without a key");
                continue;
            }
            props.set(&k, &v);
        }
        props
    }
}

/// The page kinds the dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageKind {
    Account,
    Accounts,
    Category,
}

impl PageKind {
    pub(crate) fn all() -> &'static [PageKind] {
        &[Self::Account, Self::Accounts, Self::Category]
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Accounts => "accounts",
            Self::Category => "category",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }

    /// Whether the page is addressed by an integer id in the last path segment.
    pub(crate) fn needs_id(&self) -> bool {
        matches!(self, Self::Account | Self::Category)
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A URL broken down into the page kind and the props the page is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    pub(crate) kind: String,
    pub(crate) props: Props,
}

impl Route {
    /// `/<kind>/<...>/<last>`: an integer last segment becomes the `id` prop;
    /// otherwise the query string is folded into props.
    pub(crate) fn parse(path: &str, query: Option<&str>) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
        let kind = segments.get(1).copied().unwrap_or_default().to_string();
        let last = segments.last().copied().unwrap_or_default();

        let props = match last.parse::<i64>() {
            Ok(id) => Props::new().with("id", &id.to_string()),
            Err(_) => query.map(Props::from_query_string).unwrap_or_default(),
        };
        Self { kind, props }
    }

    /// Split `path?query` as typed on a command line.
    pub(crate) fn parse_target(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self::parse(path, Some(query)),
            None => Self::parse(target, None),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no page for /{kind}")]
pub(crate) struct NotFound {
    pub(crate) kind: String,
}

/// Every renderable page, one variant per registered kind.
#[derive(Debug)]
pub(crate) enum Page {
    Account(AccountBlock),
    Accounts(AccountsListBlock),
    Category(CategoryBlock),
}

impl Page {
    /// Look the route up in the page registry and build the page from its props.
    pub(crate) fn build(route: Route) -> Result<Self, NotFound> {
        let not_found = || NotFound {
            kind: route.kind.clone(),
        };
        let kind = PageKind::parse(&route.kind).ok_or_else(not_found)?;
        Ok(match (kind, route.props.id()) {
            (PageKind::Account, Some(id)) => Self::Account(AccountBlock::new(id)),
            (PageKind::Category, Some(id)) => Self::Category(CategoryBlock::new(id)),
            (PageKind::Accounts, _) => Self::Accounts(AccountsListBlock::new(route.props)),
            (PageKind::Account | PageKind::Category, None) => return Err(not_found()),
        })
    }

    pub(crate) fn kind(&self) -> PageKind {
        match self {
            Self::Account(_) => PageKind::Account,
            Self::Accounts(_) => PageKind::Accounts,
            Self::Category(_) => PageKind::Category,
        }
    }

    pub(crate) fn title(&self) -> String {
        match self {
            Self::Account(block) => block.title(),
            Self::Accounts(_) => "Accounts".to_string(),
            Self::Category(block) => block.title(),
        }
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, token: MountToken) {
        match self {
            Self::Account(block) => block.mount(backend, token).await,
            Self::Accounts(block) => block.mount(backend, token).await,
            Self::Category(block) => block.mount(backend, token).await,
        }
    }

    pub(crate) fn render(&self) -> Markup {
        match self {
            Self::Account(block) => block.render(),
            Self::Accounts(block) => block.render(),
            Self::Category(block) => block.render(),
        }
    }
}

struct Mounted {
    page: Page,
    mount: Mount,
}

/// The page outlet: either nothing is mounted, or exactly one page is.
#[derive(Default)]
pub(crate) struct App {
    mounted: Option<Mounted>,
}

impl App {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn page(&self) -> Option<&Page> {
        self.mounted.as_ref().map(|m| &m.page)
    }

    /// Unmount the current page, then dispatch `route` and mount what it selects.
    /// An unknown route leaves nothing mounted.
    pub(crate) async fn navigate<B: Backend>(
        &mut self,
        backend: &B,
        route: Route,
    ) -> Result<(), NotFound> {
        self.unmount();
        let mut page = Page::build(route)?;
        let mount = Mount::new();
        tracing::info!(kind = %page.kind(), "mounting page");
        page.mount(backend, mount.token()).await;
        self.mounted = Some(Mounted { page, mount });
        Ok(())
    }

    pub(crate) fn unmount(&mut self) {
        if let Some(Mounted { page, mount }) = self.mounted.take() {
            tracing::debug!(kind = %page.kind(), "unmounting page");
            mount.unmount();
        }
    }

    /// The full document for whatever is mounted.
    pub(crate) fn render(&self, stylesheet: Option<&str>) -> Markup {
        match self.page() {
            Some(page) => render::document(&page.title(), stylesheet, page.render()),
            None => render::not_found_document(None, stylesheet),
        }
    }
}
