use std::borrow::Cow;
use reedline::{
    Prompt,
    PromptEditMode,
    PromptHistorySearch,
    Reedline,
    Signal,
};

use contacts::{
    Error,
    error::Result,
    LineReader,
    State,
};

pub(crate) struct StatePrompt {
    state: State,
}

impl Prompt for StatePrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        format!("{}> ", self.state).into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}

pub(crate) struct ReedlineReader {
    editor: Reedline,
}

impl ReedlineReader {
    pub(crate) fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }
}

impl LineReader for ReedlineReader {
    fn read_line(&mut self, state: State) -> Result<Option<String>> {
        let prompt = StatePrompt { state };
        let sig = self.editor.read_line(&prompt).map_err(|e| {
            Error::Io(format!("Reading console input error: {e}"))
        })?;

        #[allow(unreachable_patterns)]
        match sig {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlC | Signal::CtrlD => Ok(None),
            _ => Ok(None),
        }
    }
}
