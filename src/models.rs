use serde::Serialize;

/// One entry of the VuePress default-theme sidebar.
///
/// Serializes to either a bare link string or a group object, which is the
/// shape the theme's `sidebar` option expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarNode {
    Link(String),
    Group(SidebarGroup),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub text: String,
    pub collapsible: bool,
    pub children: Vec<String>,
}

impl SidebarNode {
    pub fn link(path: impl Into<String>) -> Self {
        SidebarNode::Link(path.into())
    }

    pub fn group(text: impl Into<String>, collapsible: bool, children: Vec<String>) -> Self {
        SidebarNode::Group(SidebarGroup {
            text: text.into(),
            collapsible,
            children,
        })
    }
}

/// Navbar link for the theme's `navbar` option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavbarItem {
    pub text: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sidebar_json_shape() {
        let tree = vec![
            SidebarNode::link("/前言.md"),
            SidebarNode::group(
                "第三章 威氏逃顶策略",
                true,
                vec!["/第三章_威氏逃顶策略/第一节_牛市到顶的信号.md".to_string()],
            ),
        ];

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            json!([
                "/前言.md",
                {
                    "text": "第三章 威氏逃顶策略",
                    "collapsible": true,
                    "children": ["/第三章_威氏逃顶策略/第一节_牛市到顶的信号.md"]
                }
            ])
        );
    }
}
