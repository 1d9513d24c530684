use api::catalog::{CatalogItem, Material};

// image lightbox state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    pub fn new(images: Vec<String>, index: usize) -> Self {
        let index = if index < images.len() { index } else { 0 };

        Gallery { images, index }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.index = index;
        }
    }
}

// every overlay the storefront can show; pushing one onto the stack shows it
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Search,
    Gallery(Gallery),
    MaterialDetail(Material),
    EditItem(CatalogItem),
    DeleteItem(CatalogItem),
}

// DialogStack
//
// only the top dialog is displayed, and closing it reveals whatever opened it.
// a single stack is created at the root of the app and handed down through the
// component context, so any component can open a dialog without a shared
// global
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogStack {
    stack: Vec<Dialog>,
}

impl DialogStack {
    pub fn push(&mut self, dialog: Dialog) {
        self.stack.push(dialog);
    }

    pub fn pop(&mut self) -> Option<Dialog> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Dialog> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Dialog> {
        self.stack.last_mut()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn gallery(n: usize) -> Gallery {
        Gallery::new((0..n).map(|i| format!("{i}.jpg")).collect(), 0)
    }

    #[test]
    fn gallery_wraps_in_both_directions() {
        let mut g = gallery(3);

        g.prev();
        assert_eq!(g.current(), Some("2.jpg"));

        g.next();
        g.next();
        assert_eq!(g.current(), Some("1.jpg"));
    }

    #[test]
    fn gallery_ignores_bad_indices() {
        let mut g = Gallery::new(vec![String::from("a.jpg")], 4);
        assert_eq!(g.index(), 0);

        g.select(1);
        assert_eq!(g.index(), 0);

        let mut empty = gallery(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.current(), None);
    }

    #[test]
    fn closing_the_top_dialog_reveals_the_one_below() {
        let mut stack = DialogStack::default();

        stack.push(Dialog::MaterialDetail(Material {
            common_name: Some(String::from("Oak")),
            ..Default::default()
        }));
        stack.push(Dialog::Gallery(gallery(2)));

        if let Some(Dialog::Gallery(g)) = stack.top_mut() {
            g.next();
        }
        assert_matches!(stack.top(), Some(Dialog::Gallery(g)) if g.index() == 1);

        stack.pop();
        assert_matches!(stack.top(), Some(Dialog::MaterialDetail(m)) if m.name() == "Oak");

        stack.clear();
        assert!(stack.is_empty());
    }
}
