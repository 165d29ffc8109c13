mod cli;
mod server;

pub(crate) use cli::as_cli;
pub(crate) use server::as_server;

use crate::backend::Backend;
use crate::ui::app::{App, NotFound, Route};
use crate::ui::html::Markup;

/// One complete page lifecycle: dispatch, mount, render, unmount.
pub(crate) async fn render_page<B: Backend>(
    backend: &B,
    route: Route,
    stylesheet: Option<&str>,
) -> Result<Markup, NotFound> {
    let mut app = App::new();
    app.navigate(backend, route).await?;
    let html = app.render(stylesheet);
    app.unmount();
    Ok(html)
}
