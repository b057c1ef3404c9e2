use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::context::ContextProvider;
use yew::html::Classes;
use yew::{html, Callback, Children, Component, Context, Html, Properties};

use super::{history, pathname, window};
use crate::statics::config;

#[derive(Debug, PartialEq, Properties)]
pub struct Props {
    pub children: Children,
}

/// The root of the routing tree. All [`Switch`]es and [`Link`]s must be descendants of a
/// `Router`.
pub struct Router {
    history: History,
    // Dropping the listener removes it from the window.
    _popstate: EventListener,
}

impl Component for Router {
    type Message = String;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let callback = ctx.link().callback(|url| url);
        let history = History::new(callback);

        // Back/forward navigation changes the location without going through `History::push`.
        let on_popstate = ctx.link().callback(|url| url);
        let popstate = EventListener::new(&window(), "popstate", move |_| {
            on_popstate.emit(pathname());
        });

        Self {
            history,
            _popstate: popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: String) -> bool {
        {
            let mut state = self.history.state.borrow_mut();
            state.path = Path::new(strip_root(&msg, config().root()));
        }

        // Switches may register or unregister while being woken.
        let waiting = self.history.switches.borrow().waiting();

        log::debug!("Waking {} waiting switches", waiting.len());

        for cb in waiting {
            cb.emit(());
        }

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let history = self.history.clone();

        html! {
            <>
                <ContextProvider<History> context={history}>
                    { for ctx.props().children.iter() }
                </ContextProvider<History>>
            </>
        }
    }
}

#[derive(Clone, Debug)]
pub struct State {
    path: Path,
}

/// A handle to the browser history shared by all components below a [`Router`].
#[derive(Clone, Debug)]
pub struct History {
    history: web_sys::History,
    callback: Callback<String>,
    state: Rc<RefCell<State>>,
    // Switches in registered order
    switches: Rc<RefCell<SwitchList>>,
}

impl History {
    pub fn new(cb: Callback<String>) -> Self {
        let path = pathname();

        Self {
            history: history(),
            callback: cb,
            state: Rc::new(RefCell::new(State {
                path: Path::new(strip_root(&path, config().root())),
            })),
            switches: Rc::new(RefCell::new(SwitchList::new())),
        }
    }

    /// Navigates to `url`, relative to the configured root, without reloading the document.
    pub fn push(&self, url: String) {
        let url = join_root(config().root(), &url);

        log::debug!("History::push {:?}", url);

        if let Err(err) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            log::error!("Failed to push history: {:?}", err);
            return;
        }

        self.callback.emit(url);
    }
}

impl PartialEq for History {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state) && Rc::ptr_eq(&self.switches, &other.switches)
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct LinkProps {
    pub children: Children,
    #[prop_or_default]
    pub classes: Classes,
    pub to: String,
}

/// An anchor that navigates to `to` using the [`History`] of the enclosing [`Router`].
#[derive(Debug)]
pub struct Link {
    _priv: (),
}

impl Component for Link {
    type Message = ();
    type Properties = LinkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { _priv: () }
    }

    fn update(&mut self, ctx: &Context<Self>, _msg: ()) -> bool {
        match ctx.link().context::<History>(Callback::noop()) {
            Some((history, _)) => history.push(ctx.props().to.clone()),
            None => log::warn!("Link to {:?} used outside of a Router", ctx.props().to),
        }

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // Modified and non-primary clicks are left to the browser, e.g. to open a new tab.
        let onclick = ctx.link().batch_callback(|event: MouseEvent| {
            if is_modified_click(
                event.button(),
                event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key(),
            ) {
                return None;
            }

            event.prevent_default();
            Some(())
        });

        let classes = ctx.props().classes.clone();
        let href = ctx.props().to.clone();

        html! {
            <a class={classes} {href} {onclick}>
                { for ctx.props().children.iter() }
            </a>
        }
    }
}

pub trait Routable: Sized + Clone + PartialEq {
    fn from_path(path: &mut Path) -> Option<Self>;

    fn to_path(&self) -> String;

    /// The route used when [`from_path`] doesn't match.
    ///
    /// [`from_path`]: Self::from_path
    fn not_found() -> Option<Self> {
        None
    }
}

/// Resolves the route for `path`, falling back to [`Routable::not_found`].
///
/// `path` itself is left untouched.
pub fn resolve<R>(path: &Path) -> Option<R>
where
    R: Routable,
{
    let mut path = path.clone();
    R::from_path(&mut path).or_else(R::not_found)
}

#[derive(Properties)]
pub struct SwitchProps<R>
where
    R: PartialEq,
{
    pub render: Rc<dyn Fn(&R) -> Html>,
}

impl<R> PartialEq for SwitchProps<R>
where
    R: PartialEq,
{
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

pub struct Switch<R>
where
    R: Routable,
{
    handle: usize,
    _marker: PhantomData<R>,
}

impl<R> Switch<R>
where
    R: Routable,
{
    pub fn render<F>(f: F) -> Rc<dyn Fn(&R) -> Html>
    where
        F: Fn(&R) -> Html + 'static,
    {
        Rc::new(f)
    }
}

impl<R> Component for Switch<R>
where
    R: Routable + 'static,
{
    type Message = ();
    type Properties = SwitchProps<R>;

    fn create(ctx: &Context<Self>) -> Self {
        let (history, _) = ctx
            .link()
            .context::<History>(Callback::noop())
            .expect("no router installed");

        let mut switches = history.switches.borrow_mut();

        let cb = ctx.link().callback(|_| ());
        let handle = switches.push(cb);

        Self {
            handle,
            _marker: PhantomData,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: ()) -> bool {
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (history, _) = ctx
            .link()
            .context::<History>(Callback::noop())
            .expect("no router installed");
        let state = history.state.borrow();

        log::debug!("Matching route: {:?}", state);

        match resolve::<R>(&state.path) {
            Some(route) => (ctx.props().render)(&route),
            None => html! {},
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        let (history, _) = ctx
            .link()
            .context::<History>(Callback::noop())
            .expect("no router installed");

        let mut switches = history.switches.borrow_mut();
        switches.remove(self.handle);
    }
}

/// Returns `true` if a click with the given mouse `button` and modifier state should not be
/// handled as in-app navigation.
fn is_modified_click(button: i16, modifiers: bool) -> bool {
    button != 0 || modifiers
}

/// Joins `url` onto the `root` prefix, producing the location path to push.
///
/// An empty `root` is treated as `/`, so the result is never empty. `history.pushState` doesn't
/// accept an empty url.
pub fn join_root(root: &str, url: &str) -> String {
    let root = if root.is_empty() { "/" } else { root };
    let seg = url.strip_prefix('/').unwrap_or(url);

    if root.ends_with('/') {
        format!("{}{}", root, seg)
    } else {
        format!("{}/{}", root, seg)
    }
}

/// Removes the `root` prefix from the location path `path`.
///
/// The prefix is only removed at a segment boundary: with a root of `/web`, `/web/a` becomes
/// `/a` but `/website` is returned unchanged.
pub fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return path;
    }

    match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

#[derive(Clone)]
pub struct Path {
    parts: Vec<String>,
    pos: usize,
}

impl Path {
    pub(crate) fn new(path: &str) -> Self {
        let parts = path
            .split('/')
            .filter(|s| !(*s).is_empty())
            .map(|s| s.to_string())
            .collect();

        Self { parts, pos: 0 }
    }

    pub fn take(&mut self) -> Option<&str> {
        let path = self.parts.get(self.pos)?;
        self.pos += 1;

        log::trace!("Taking part {}: {:?}", self.pos - 1, path);

        Some(path)
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"/{}\"", self.parts.join("/"))
    }
}

#[derive(Clone, Debug)]
struct SwitchList {
    list: BTreeMap<usize, Callback<()>>,
    id: usize,
}

impl SwitchList {
    fn new() -> Self {
        Self {
            list: BTreeMap::new(),
            id: 0,
        }
    }

    /// Pushes a new switch to the list and returns a handle to it.
    fn push(&mut self, cb: Callback<()>) -> usize {
        let id = self.id;
        self.id += 1;
        self.list.insert(id, cb);

        id
    }

    fn remove(&mut self, handle: usize) {
        self.list.remove(&handle);
    }

    /// Returns the callbacks of all registered switches.
    fn waiting(&self) -> Vec<Callback<()>> {
        self.list.values().cloned().collect()
    }
}
