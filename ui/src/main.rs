use ui::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
