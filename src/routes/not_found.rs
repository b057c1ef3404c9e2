use yew::prelude::*;

use super::Route;
use crate::utils::router::{Link, Routable};

/// A 404 error handler.
///
/// Rendered for every path that doesn't match any other [`Route`].
pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="min-h-screen flex flex-col items-center justify-center bg-background">
                <h1 class="text-4xl font-bold mb-4">{ "404" }</h1>
                <p class="text-muted-foreground mb-4">{ "Página não encontrada" }</p>
                <Link to={Route::Index.to_path()} classes={classes!("text-primary", "hover:underline")}>
                    { "Voltar ao início" }
                </Link>
            </div>
        }
    }
}
