mod api;
mod toast;
mod ui;
mod util;

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LoginInfo {
    pub host: String,
    pub token: String,
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}
