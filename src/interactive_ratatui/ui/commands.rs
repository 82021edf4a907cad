use crate::browse::FetchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Fetch(FetchRequest),
    CopyToClipboard(String),
    ShowMessage(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}

impl From<Option<FetchRequest>> for Command {
    fn from(request: Option<FetchRequest>) -> Self {
        request.map_or(Command::None, Command::Fetch)
    }
}
