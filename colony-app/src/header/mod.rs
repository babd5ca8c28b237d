use yew::{html, Component, Context, Html};

/// Text shown by the header.
const LABEL: &str = "colony";

/// Leaf display unit: the fixed app label, centered, with 2rem of vertical
/// margin. Takes no props and never updates.
pub struct Header {
    /// Set at creation and never rendered; the view shows [`LABEL`] instead.
    #[allow(dead_code)]
    title: &'static str,
}

impl Header {
    fn new() -> Self {
        Header { title: "header" }
    }
}

impl Component for Header {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Header::new()
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="Header">
                <p style="margin: 2rem; text-align: center;">{ LABEL }</p>
            </div>
        }
    }
}
