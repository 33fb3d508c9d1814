/// Built-in sample snippet shown in the example picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeExample {
    pub id: &'static str,
    pub name: &'static str,
    pub language: &'static str,
    pub category: &'static str,
    pub code: &'static str,
}
