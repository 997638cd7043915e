use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::ERROR_BANNER_TIMEOUT_MS;
use yew::prelude::*;

/// What the `#errorMessage` element currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerState {
    pub message: String,
    pub visible: bool,
}

pub enum BannerAction {
    Show(String),
    Hide,
}

impl Reducible for BannerState {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BannerAction::Show(message) => Rc::new(Self {
                message,
                visible: true,
            }),
            // Keep the text so the fade-out doesn't flash an empty box
            BannerAction::Hide if self.visible => Rc::new(Self {
                message: self.message.clone(),
                visible: false,
            }),
            BannerAction::Hide => self,
        }
    }
}

/// At most one pending hide. Scheduling again or cancelling drops the
/// previous `Timeout`, which clears it.
#[derive(Default)]
pub struct AutoHide {
    pending: Option<Timeout>,
}

impl AutoHide {
    pub fn schedule<F>(&mut self, delay_ms: u32, on_elapsed: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(delay_ms, on_elapsed));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[derive(Clone)]
pub struct UseErrorBannerHandle {
    pub state: BannerState,
    /// Show a message and hide it again after `ERROR_BANNER_TIMEOUT_MS`
    pub show: Callback<String>,
    /// Hide immediately, dropping any pending auto-hide
    pub hide: Callback<()>,
}

#[hook]
pub fn use_error_banner() -> UseErrorBannerHandle {
    let banner = use_reducer(BannerState::default);
    let auto_hide = use_mut_ref(AutoHide::default);

    let show = {
        let dispatcher = banner.dispatcher();
        let auto_hide = auto_hide.clone();

        use_callback((), move |message: String, _| {
            dispatcher.dispatch(BannerAction::Show(message));

            let dispatcher = dispatcher.clone();
            auto_hide
                .borrow_mut()
                .schedule(ERROR_BANNER_TIMEOUT_MS, move || {
                    dispatcher.dispatch(BannerAction::Hide)
                });
        })
    };

    let hide = {
        let dispatcher = banner.dispatcher();
        let auto_hide = auto_hide.clone();

        use_callback((), move |_: (), _| {
            auto_hide.borrow_mut().cancel();
            dispatcher.dispatch(BannerAction::Hide);
        })
    };

    UseErrorBannerHandle {
        state: (*banner).clone(),
        show,
        hide,
    }
}
