//! Box-drawing tree dumps for debugging.

/// Renders one child subtree given the indentation prefix for its lines.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Lays out `children` under a parent line, one branch per child.
///
/// `None` entries are skipped. Each child receives the prefix its own
/// children must use, so nested calls line up:
///
/// ```text
/// 5
/// ├─ ← 3
/// └─ → 8
/// ```
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return String::new();
    };
    let mut out = String::new();
    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(render) = child else {
            continue;
        };
        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let body = render(&child_tab);
        out.push('\n');
        out.push_str(tab);
        if body.is_empty() {
            out.push('│');
            continue;
        }
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&body);
    }
    out
}
