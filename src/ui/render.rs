use crate::link::icon::IconPosition;
use crate::link::{CommandLink, FileLink, FileLinkList, LinkItem};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

fn file_link_spans<'a>(link: &'a FileLink, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for icon in link.icons().visible_icons(IconPosition::Before) {
        spans.push(Span::raw(icon.glyph()));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        link.display_name(),
        Style::default()
            .fg(theme.link)
            .add_modifier(Modifier::UNDERLINED),
    ));
    for icon in link.icons().visible_icons(IconPosition::After) {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(icon.glyph()));
    }
    spans
}

fn command_link_spans<'a>(link: &'a CommandLink, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = vec![
        Span::raw(link.display_glyph()),
        Span::raw(" "),
        Span::styled(link.play_stop_glyph(), Style::default().fg(theme.control)),
        Span::raw(" "),
    ];
    match link.output_link() {
        Some(output) => spans.extend(file_link_spans(output, theme)),
        None => spans.push(Span::styled(link.name(), Style::default().fg(theme.fg))),
    }
    if link.show_settings() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            link.settings_glyph(),
            Style::default().fg(theme.control),
        ));
    }
    spans
}

fn item_spans<'a>(item: &'a LinkItem, theme: &Theme) -> Vec<Span<'a>> {
    match item {
        LinkItem::File(link) => file_link_spans(link, theme),
        LinkItem::Command(link) => command_link_spans(link, theme),
    }
}

/// Renders one [`FileLink`] as a single line: icons-before, underlined
/// name, icons-after. Only the widget's own structure; layout is the
/// host's job.
pub struct FileLinkView<'a> {
    link: &'a FileLink,
    theme: &'a Theme,
}

impl<'a> FileLinkView<'a> {
    pub fn new(link: &'a FileLink, theme: &'a Theme) -> Self {
        Self { link, theme }
    }
}

impl Widget for FileLinkView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(file_link_spans(self.link, self.theme));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Renders one [`CommandLink`] as `[status/spinner] [▶/⏹] name [⚙?]`.
pub struct CommandLinkView<'a> {
    link: &'a CommandLink,
    theme: &'a Theme,
}

impl<'a> CommandLinkView<'a> {
    pub fn new(link: &'a CommandLink, theme: &'a Theme) -> Self {
        Self { link, theme }
    }
}

impl Widget for CommandLinkView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(command_link_spans(self.link, self.theme));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Renders a [`FileLinkList`], one row per item in insertion order:
/// `[toggle?] item [remove?]`. Rows beyond the area are clipped; an
/// optional selected row gets the theme's selection background.
pub struct FileLinkListView<'a> {
    list: &'a FileLinkList,
    theme: &'a Theme,
    selected: Option<usize>,
}

impl<'a> FileLinkListView<'a> {
    pub fn new(list: &'a FileLinkList, theme: &'a Theme) -> Self {
        Self {
            list,
            theme,
            selected: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for FileLinkListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, entry) in self.list.entries().iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let y = area.y + row as u16;

            let mut spans = Vec::new();
            if self.list.show_toggles() {
                let glyph = if entry.is_toggled() { "✓" } else { "☐" };
                spans.push(Span::styled(glyph, Style::default().fg(self.theme.control)));
                spans.push(Span::raw(" "));
            }
            spans.extend(item_spans(entry.item(), self.theme));
            if self.list.show_remove() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled("×", Style::default().fg(self.theme.error)));
            }

            let line = Line::from(spans);
            buf.set_line(area.x, y, &line, area.width);

            if self.selected == Some(row) {
                let row_area = Rect::new(area.x, y, area.width, 1);
                buf.set_style(row_area, Style::default().bg(self.theme.selection_bg));
            }
        }
    }
}
