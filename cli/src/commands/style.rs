use colored::*;
use primer_common::values::TextStyle;

use crate::terminal::print;

pub fn style(label: &str, exact: bool) -> anyhow::Result<()> {
    let style: TextStyle = if exact {
        TextStyle::lookup_exact(label)?
    } else {
        TextStyle::lookup(label)?
    };

    let sample: ColoredString = match style {
        TextStyle::Bold => label.bold(),
        TextStyle::Italics => label.italic(),
        TextStyle::Underline => label.underline(),
        TextStyle::Strikethrough => label.strikethrough(),
    };
    print::aligned_line(style.name(), sample);
    Ok(())
}
