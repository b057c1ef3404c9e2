pub mod home;
pub mod not_found;

use crate::utils::router::{Path, Routable, Router, Switch};

use yew::prelude::*;

use home::Home;
use not_found::NotFound;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Router>
                <Switch<Route> render={Switch::render(switch)} />
            </Router>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Index,
    NotFound,
}

impl Routable for Route {
    fn from_path(path: &mut Path) -> Option<Self> {
        match path.take() {
            None => Some(Self::Index),
            Some(_) => None,
        }
    }

    fn to_path(&self) -> String {
        match self {
            Self::Index => String::from("/"),
            Self::NotFound => String::from("/404"),
        }
    }

    fn not_found() -> Option<Self> {
        Some(Self::NotFound)
    }
}

pub fn switch(route: &Route) -> Html {
    match route {
        Route::Index => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::utils::router::{resolve, Path, Routable};

    #[test]
    fn test_route_index() {
        assert_eq!(resolve::<Route>(&Path::new("")), Some(Route::Index));
        assert_eq!(resolve::<Route>(&Path::new("/")), Some(Route::Index));
    }

    #[test]
    fn test_route_fallback() {
        assert_eq!(
            resolve::<Route>(&Path::new("/this-path-does-not-exist")),
            Some(Route::NotFound)
        );
        assert_eq!(resolve::<Route>(&Path::new("/a/b/c")), Some(Route::NotFound));
        assert_eq!(resolve::<Route>(&Path::new("/404")), Some(Route::NotFound));
    }

    #[test]
    fn test_route_resolve_is_repeatable() {
        let path = Path::new("/this-path-does-not-exist");

        for _ in 0..3 {
            assert_eq!(resolve::<Route>(&path), Some(Route::NotFound));
        }
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Index.to_path(), "/");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn test_route_from_path_without_fallback() {
        let mut path = Path::new("/unknown");
        assert_eq!(Route::from_path(&mut path), None);
    }
}
