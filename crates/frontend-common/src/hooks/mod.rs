//! Custom hooks shared by the page components

use crate::geometry::{DomSectionGeometry, scroll_offset, scroll_to_section};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use softsell_core::{ScrollSpy, SectionId, Throttle, ThrottleDecision};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ScrollSpyState(ScrollSpy);

enum ScrollSpyAction {
    Scrolled(f64),
    Select(SectionId),
}

impl Reducible for ScrollSpyState {
    type Action = ScrollSpyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ScrollSpyAction::Scrolled(scroll_y) => self.0.update(scroll_y, &DomSectionGeometry),
            ScrollSpyAction::Select(id) => self.0.select(id),
        };
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// Handle returned by [`use_scroll_spy`]
#[derive(Clone, PartialEq)]
pub struct ScrollSpyHandle {
    pub spy: ScrollSpy,
    /// Mark a section active and smooth-scroll to it
    pub navigate: Callback<SectionId>,
}

/// Track the section under the fixed header and whether the page has scrolled
#[hook]
pub fn use_scroll_spy() -> ScrollSpyHandle {
    let state = use_reducer(ScrollSpyState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(ScrollSpyAction::Scrolled(scroll_offset()));

            let throttle = Rc::new(RefCell::new(Throttle::default()));
            let trailing: Rc<RefCell<Option<Timeout>>> = Rc::default();

            let listener = {
                let trailing = trailing.clone();
                EventListener::new(&window(), "scroll", move |_| {
                    let decision = throttle.borrow_mut().accept(js_sys::Date::now());
                    match decision {
                        ThrottleDecision::Handle => {
                            dispatcher.dispatch(ScrollSpyAction::Scrolled(scroll_offset()));
                        }
                        ThrottleDecision::Defer { after_ms } => {
                            let throttle = throttle.clone();
                            let dispatcher = dispatcher.clone();
                            let timeout = Timeout::new(after_ms, move || {
                                throttle.borrow_mut().flush(js_sys::Date::now());
                                dispatcher.dispatch(ScrollSpyAction::Scrolled(scroll_offset()));
                            });
                            *trailing.borrow_mut() = Some(timeout);
                        }
                        ThrottleDecision::Skip => {}
                    }
                })
            };
            move || {
                drop(listener);
                *trailing.borrow_mut() = None;
            }
        });
    }

    let navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: SectionId| {
            dispatcher.dispatch(ScrollSpyAction::Select(id));
            if let Err(err) = scroll_to_section(id) {
                tracing::warn!(%err, "cannot scroll to section");
            }
        })
    };

    ScrollSpyHandle {
        spy: state.0,
        navigate,
    }
}
