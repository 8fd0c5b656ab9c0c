//! Not Found View

use super::render;

/// Shown for any path outside the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn render(&self) -> String {
        format!(
            "{}The page `{}` doesn't exist.\nType `/` to go to the dashboard.\n",
            render::heading("Page Not Found"),
            self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let text = NotFoundView::new("/medals").render();
        assert!(text.starts_with("Page Not Found\n"));
        assert!(text.contains("`/medals`"));
    }
}
