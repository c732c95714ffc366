use dioxus::prelude::*;
use ui::views::QueryView;

#[component]
pub fn Query() -> Element {
    rsx! {
        document::Title { "ユーザー検索" }
        QueryView {}
    }
}
