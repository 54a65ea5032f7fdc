use kudos_client::api::Credentials;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {
    pub last_host: Option<String>,
    pub on_submit: Callback<(String, Credentials)>,
}

pub struct Login {
    host: String,
    email: String,
    password: String,
}

pub enum LoginMsg {
    HostChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    SubmitClicked,
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            host: ctx.props().last_host.clone().unwrap_or_default(),
            email: String::new(),
            password: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::HostChanged(h) => self.host = h,
            LoginMsg::EmailChanged(e) => self.email = e,
            LoginMsg::PasswordChanged(p) => self.password = p,
            LoginMsg::SubmitClicked => {
                ctx.props().on_submit.emit((
                    self.host.trim_end_matches('/').to_string(),
                    Credentials {
                        email: self.email.clone(),
                        password: self.password.clone(),
                    },
                ));
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    LoginMsg::$msg(input.value())
                })
            };
        }
        let onsubmit = ctx.link().callback(|e: web_sys::SubmitEvent| {
            e.prevent_default();
            LoginMsg::SubmitClicked
        });
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Kudos" }</h1>
            </div>
            <form class="login-form" { onsubmit }>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="host">{ "Host" }</label>
                    <input
                        type="url"
                        class="form-control form-control-lg"
                        id="host"
                        placeholder="https://kudos.example.org"
                        value={ self.host.clone() }
                        onchange={ callback_for!(HostChanged) }
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="email">{ "Email" }</label>
                    <input
                        type="email"
                        class="form-control form-control-lg"
                        id="email"
                        placeholder="you@example.org"
                        value={ self.email.clone() }
                        onchange={ callback_for!(EmailChanged) }
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="password">{ "Password" }</label>
                    <input
                        type="password"
                        class="form-control form-control-lg"
                        id="password"
                        value={ self.password.clone() }
                        onchange={ callback_for!(PasswordChanged) }
                    />
                </div>
                <button type="submit" class="btn btn-primary">
                    { "Sign in" }
                </button>
            </form>
        </>}
    }
}
