use yew::{html, Callback, Component, ComponentLink, Html, MouseEvent, Properties, ShouldRender};

/// Visibility flag plus the last shown message. Hiding keeps the text,
/// only `show` replaces it.
#[derive(Default)]
pub struct DialogState {
    visible: bool,
    message: String,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Properties)]
pub struct Props {
    pub visible: bool,
    pub message: String,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Close,
    ContentClick(MouseEvent),
}

/// Modal overlay. Closes on its close control or on a click that lands
/// on the backdrop; clicks inside the content box never bubble out.
/// The message is rendered as a text node, caller strings are never
/// interpreted as markup.
pub struct Dialog {
    link: ComponentLink<Dialog>,
    visible: bool,
    message: String,
    on_close: Callback<()>,
}

impl Component for Dialog {
    type Message = Msg;
    type Properties = Props;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        Dialog {
            link,
            visible: props.visible,
            message: props.message,
            on_close: props.on_close,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::Close => {
                self.on_close.emit(());
                false
            }
            Msg::ContentClick(event) => {
                event.stop_propagation();
                false
            }
        }
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        if self.visible != props.visible || self.message != props.message {
            self.visible = props.visible;
            self.message = props.message;
            true
        } else {
            false
        }
    }

    fn view(&self) -> Html {
        let modal_class = if self.visible { "modal show" } else { "modal" };
        html! {
            <div class=modal_class onclick=self.link.callback(|_| Msg::Close)>
                <div class="modal-content" onclick=self.link.callback(Msg::ContentClick)>
                    <span class="close-btn" onclick=self.link.callback(|_| Msg::Close)>{ "×" }</span>
                    <p class="modal-message">{ &self.message }</p>
                </div>
            </div>
        }
    }
}
