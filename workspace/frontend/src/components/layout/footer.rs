use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-6 bg-base-300 text-base-content">
            <h2 class="text-lg font-bold">{"Waste Management"}</h2>
            <div class="grid grid-flow-col gap-4 text-xl">
                <i class="fab fa-facebook-f"></i>
                <i class="fab fa-twitter"></i>
                <i class="fab fa-instagram"></i>
            </div>
            <p>{"© 2024 Waste Management | All Rights Reserved"}</p>
        </footer>
    }
}
