/// Open/closed state of a single elevator car's door. Created closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Door {
    is_open: bool,
}

impl Door {
    pub fn new(is_open: bool) -> Door {
        Door { is_open }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}
