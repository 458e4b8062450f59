//! Tab navigation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Inspire,
    Library,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Inspire => "Inspire Me",
            Tab::Library => "My Library",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Inspire, Tab::Library]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Tab {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}
