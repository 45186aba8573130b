use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::utils::listener::EventListenerGuard;

/// Viewport width (px) from which the desktop navigation replaces the mobile menu.
pub const MD_BREAKPOINT_PX: f64 = 768.0;

/// Attribute marking the subtree where a pointer-down does not dismiss the menu.
pub const MENU_MARKER_ATTR: &str = "data-mobile-menu";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionAnchor {
    Recorder,
    Features,
    HowItWorks,
    Faq,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 4] = [
        SectionAnchor::Recorder,
        SectionAnchor::Features,
        SectionAnchor::HowItWorks,
        SectionAnchor::Faq,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SectionAnchor::Recorder => "recorder",
            SectionAnchor::Features => "features",
            SectionAnchor::HowItWorks => "how-it-works",
            SectionAnchor::Faq => "faq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionAnchor::Recorder => "Record",
            SectionAnchor::Features => "Features",
            SectionAnchor::HowItWorks => "How it works",
            SectionAnchor::Faq => "FAQ",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Resize { width: f64 },
    PointerDown { inside_menu: bool },
    /// A menu entry was chosen.
    Close,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn next(self, action: MenuAction) -> MenuState {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (MenuState::Open, MenuAction::Resize { width }) if width >= MD_BREAKPOINT_PX => {
                MenuState::Closed
            }
            (MenuState::Open, MenuAction::PointerDown { inside_menu: false }) => MenuState::Closed,
            (MenuState::Open, MenuAction::Close) => MenuState::Closed,
            (state, _) => state,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Element lookup and scrolling, as provided by the browser document.
pub trait SectionLookup {
    type Section;

    fn find_section(&self, id: &str) -> Option<Self::Section>;
    fn scroll_smoothly(&self, section: &Self::Section);
}

impl SectionLookup for Document {
    type Section = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn scroll_smoothly(&self, section: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smoothly scrolls the section with `anchor_id` into view. Unknown ids are ignored.
pub fn scroll_to_section<L: SectionLookup + ?Sized>(lookup: &L, anchor_id: &str) {
    match lookup.find_section(anchor_id) {
        Some(section) => lookup.scroll_smoothly(&section),
        None => log::debug!("No section #{} mounted, not scrolling", anchor_id),
    }
}

pub fn scroll_to_anchor(anchor_id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        scroll_to_section(&document, anchor_id);
    }
}

/// Scrolls to `anchor` and returns the action that closes the menu behind it.
pub fn navigate_to<L: SectionLookup + ?Sized>(lookup: &L, anchor: SectionAnchor) -> MenuAction {
    scroll_to_section(lookup, anchor.id());
    MenuAction::Close
}

// `closest` is `None` when the target is not an element. A failed selector lookup
// counts as outside.
fn has_marked_ancestor<T, E>(closest: Option<Result<Option<T>, E>>) -> bool {
    matches!(closest, Some(Ok(Some(_))))
}

fn is_inside_menu(event: &Event) -> bool {
    let closest = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.closest(&format!("[{}]", MENU_MARKER_ATTR)));
    has_marked_ancestor(closest)
}

fn attach_menu_listeners(dispatcher: UseReducerDispatcher<MenuState>) -> Vec<EventListenerGuard> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let mut guards = Vec::new();

    let on_resize = {
        let dispatcher = dispatcher.clone();
        move |_: Event| {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64());
            if let Some(width) = width {
                dispatcher.dispatch(MenuAction::Resize { width });
            }
        }
    };
    guards.extend(EventListenerGuard::attach(window.as_ref(), "resize", on_resize));

    if let Some(document) = window.document() {
        let on_pointer_down = move |event: Event| {
            dispatcher.dispatch(MenuAction::PointerDown {
                inside_menu: is_inside_menu(&event),
            });
        };
        guards.extend(EventListenerGuard::attach(
            document.as_ref(),
            "pointerdown",
            on_pointer_down,
        ));
    }

    guards
}

#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub state: MenuState,
    pub toggle: Callback<()>,
    /// Scrolls to a section and closes the mobile menu.
    pub navigate: Callback<SectionAnchor>,
}

/// Mobile menu state plus section navigation for one page shell.
///
/// Resize and pointer-down listeners live as long as the calling component is
/// mounted. They dispatch into the reducer, so they always act on the current state.
#[hook]
pub fn use_navigation() -> NavigationHandle {
    let menu = use_reducer_eq(MenuState::default);

    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let guards = attach_menu_listeners(dispatcher);
                move || drop(guards)
            },
            (),
        );
    }

    let toggle = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(MenuAction::Toggle))
    };
    let navigate = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |anchor: SectionAnchor| {
            let action = match web_sys::window().and_then(|w| w.document()) {
                Some(document) => navigate_to(&document, anchor),
                None => MenuAction::Close,
            };
            dispatcher.dispatch(action);
        })
    };

    NavigationHandle {
        state: *menu,
        toggle,
        navigate,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;

    struct FakeDocument {
        mounted: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn with(mounted: &[&'static str]) -> Self {
            Self {
                mounted: mounted.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionLookup for FakeDocument {
        type Section = String;

        fn find_section(&self, id: &str) -> Option<String> {
            self.mounted.iter().any(|m| *m == id).then(|| id.to_string())
        }

        fn scroll_smoothly(&self, section: &String) {
            self.scrolled.borrow_mut().push(section.clone());
        }
    }

    fn run(actions: &[MenuAction]) -> MenuState {
        actions
            .iter()
            .fold(MenuState::default(), |state, action| state.next(*action))
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_parity_decides_open() {
        for count in 0..8 {
            let state = run(&vec![MenuAction::Toggle; count]);
            assert_eq!(state.is_open(), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn resize_closes_only_at_or_above_breakpoint() {
        let open = MenuState::Open;
        assert_eq!(open.next(MenuAction::Resize { width: 768.0 }), MenuState::Closed);
        assert_eq!(open.next(MenuAction::Resize { width: 1440.0 }), MenuState::Closed);
        assert_eq!(open.next(MenuAction::Resize { width: 767.0 }), MenuState::Open);
        assert_eq!(open.next(MenuAction::Resize { width: 375.0 }), MenuState::Open);
        assert_eq!(
            MenuState::Closed.next(MenuAction::Resize { width: 1024.0 }),
            MenuState::Closed
        );
    }

    #[test]
    fn repeated_resizes_are_idempotent() {
        let wide = MenuAction::Resize { width: 1024.0 };
        assert_eq!(run(&[MenuAction::Toggle, wide, wide, wide]), MenuState::Closed);
    }

    #[test]
    fn pointer_down_outside_closes_inside_keeps_open() {
        assert_eq!(
            MenuState::Open.next(MenuAction::PointerDown { inside_menu: false }),
            MenuState::Closed
        );
        assert_eq!(
            MenuState::Open.next(MenuAction::PointerDown { inside_menu: true }),
            MenuState::Open
        );
        assert_eq!(
            MenuState::Closed.next(MenuAction::PointerDown { inside_menu: false }),
            MenuState::Closed
        );
    }

    #[test]
    fn open_then_wide_resize_closes() {
        let state = MenuState::default().next(MenuAction::Toggle);
        assert_eq!(state, MenuState::Open);
        assert_eq!(state.next(MenuAction::Resize { width: 1024.0 }), MenuState::Closed);
    }

    #[test]
    fn inside_click_keeps_menu_until_outside_click() {
        let state = MenuState::default().next(MenuAction::Toggle);
        assert_eq!(state, MenuState::Open);
        let state = state.next(MenuAction::PointerDown { inside_menu: true });
        assert_eq!(state, MenuState::Open);
        let state = state.next(MenuAction::PointerDown { inside_menu: false });
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn choosing_an_entry_closes_the_menu() {
        assert_eq!(MenuState::Open.next(MenuAction::Close), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuAction::Close), MenuState::Closed);
    }

    #[test]
    fn navigate_scrolls_once_and_closes_open_menu() {
        let document = FakeDocument::with(&["recorder", "features", "how-it-works", "faq"]);
        let state = MenuState::default().next(MenuAction::Toggle);

        let state = state.next(navigate_to(&document, SectionAnchor::HowItWorks));

        assert_eq!(state, MenuState::Closed);
        assert_eq!(*document.scrolled.borrow(), vec!["how-it-works".to_string()]);
    }

    #[test]
    fn navigate_to_unmounted_section_still_closes() {
        let document = FakeDocument::with(&[]);
        let state = MenuState::Open.next(navigate_to(&document, SectionAnchor::Faq));
        assert_eq!(state, MenuState::Closed);
        assert!(document.scrolled.borrow().is_empty());
    }

    #[test]
    fn marked_ancestor_decides_inside() {
        // Target inside the marked nav.
        assert!(has_marked_ancestor::<&str, ()>(Some(Ok(Some("nav")))));
        // Element with no marked ancestor.
        assert!(!has_marked_ancestor::<&str, ()>(Some(Ok(None))));
        // Target that is not an element, e.g. the document itself.
        assert!(!has_marked_ancestor::<&str, ()>(None));
        // Selector lookup threw.
        assert!(!has_marked_ancestor::<&str, &str>(Some(Err("SyntaxError"))));
    }

    #[test]
    fn outside_press_after_marker_check_closes() {
        let inside = has_marked_ancestor::<&str, ()>(Some(Ok(Some("nav"))));
        let outside = has_marked_ancestor::<&str, ()>(Some(Ok(None)));
        let state = MenuState::Open.next(MenuAction::PointerDown { inside_menu: inside });
        assert_eq!(state, MenuState::Open);
        let state = state.next(MenuAction::PointerDown { inside_menu: outside });
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn reducer_keeps_same_state_on_noop() {
        let closed = Rc::new(MenuState::Closed);
        let after = closed.clone().reduce(MenuAction::PointerDown { inside_menu: false });
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(MenuAction::Toggle);
        assert_eq!(*opened, MenuState::Open);
    }

    #[test]
    fn scroll_to_mounted_section_scrolls_once() {
        let document = FakeDocument::with(&["recorder", "features", "how-it-works", "faq"]);
        scroll_to_section(&document, "faq");
        assert_eq!(*document.scrolled.borrow(), vec!["faq".to_string()]);
    }

    #[test]
    fn scroll_to_missing_section_is_noop() {
        let document = FakeDocument::with(&["faq"]);
        scroll_to_section(&document, "nonexistent");
        assert!(document.scrolled.borrow().is_empty());
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<&str> = SectionAnchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), SectionAnchor::ALL.len());
        assert!(ids.contains("how-it-works"));
    }
}
