#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Exploring,
    Quit,
}
