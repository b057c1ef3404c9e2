use yew::prelude::*;

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="min-h-screen flex flex-col items-center justify-center">
                <h1 class="text-4xl font-bold mb-4">{ "Início" }</h1>
            </div>
        }
    }
}
