use dioxus::prelude::*;
use ui::views::RegistrationView;

#[component]
pub fn Register() -> Element {
    rsx! {
        document::Title { "ユーザー登録" }
        RegistrationView {}
    }
}
