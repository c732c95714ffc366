use api::MutationOutcome;
use dioxus::prelude::*;

/// Success or failure coloring of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub tone: Tone,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Success,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Failure,
        }
    }

    /// Server message, toned by the HTTP status.
    pub fn from_outcome(outcome: &MutationOutcome) -> Self {
        if outcome.ok {
            Self::success(outcome.message.clone())
        } else {
            Self::failure(outcome.message.clone())
        }
    }

    pub fn is_success(&self) -> bool {
        self.tone == Tone::Success
    }

    pub fn color(&self) -> &'static str {
        match self.tone {
            Tone::Success => "green",
            Tone::Failure => "red",
        }
    }
}

/// Message line under the form.
#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {
            p { id: "message", class: "notice" }
        };
    };
    let color = notice.color();

    rsx! {
        p {
            id: "message",
            class: "notice",
            style: "color: {color}",
            "{notice.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tone_follows_status() {
        let ok = Notice::from_outcome(&MutationOutcome {
            ok: true,
            status: 200,
            message: "更新しました。".to_string(),
        });
        assert!(ok.is_success());
        assert_eq!(ok.color(), "green");

        let failed = Notice::from_outcome(&MutationOutcome {
            ok: false,
            status: 409,
            message: "このアドレスはすでに登録済みです。".to_string(),
        });
        assert_eq!(failed.tone, Tone::Failure);
        assert_eq!(failed.color(), "red");
        assert_eq!(failed.message, "このアドレスはすでに登録済みです。");
    }
}
