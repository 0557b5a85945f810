use fltk::{
    app::Sender,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor, WrapMode},
    window::Window,
};

use super::tab_bar::{TabBar, TAB_BAR_HEIGHT};
use crate::app::messages::Message;
use crate::app::state::FONT_SIZE;

pub const LOG_PANEL_HEIGHT: i32 = 90;
pub const STATUS_BAR_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub text_editor: TextEditor,
    pub log_panel: TextDisplay,
    pub log_buffer: TextBuffer,
    pub status_label: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1000, 700, "Untitled - Quillpad");
    wind.set_xclass("Quillpad");

    let mut flex = Flex::new(0, 0, 1000, 700, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let tab_bar = TabBar::new(0, 30, 1000, *sender);
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_text_font(Font::Helvetica);
    text_editor.set_text_size(FONT_SIZE);

    // Read-only activity log below the editor
    let log_buffer = TextBuffer::default();
    let mut log_panel = TextDisplay::new(0, 0, 0, 0, "");
    log_panel.set_buffer(log_buffer.clone());
    log_panel.set_text_font(Font::Courier);
    log_panel.set_text_size(12);
    flex.fixed(&log_panel, LOG_PANEL_HEIGHT);

    // Status row: derived counts on the left, app tag on the right
    let mut status_row = Flex::new(0, 0, 0, STATUS_BAR_HEIGHT, None);
    status_row.set_type(fltk::group::FlexType::Row);
    let mut status_label = Frame::new(0, 0, 0, 0, "Lines: 1 | Words: 0");
    status_label.set_align(Align::Left | Align::Inside);
    status_label.set_label_size(12);
    let mut app_tag = Frame::new(0, 0, 0, 0, "Quillpad");
    app_tag.set_align(Align::Right | Align::Inside);
    app_tag.set_label_size(12);
    app_tag.set_label_color(Color::from_rgb(120, 120, 120));
    status_row.end();
    flex.fixed(&status_row, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        tab_bar,
        text_editor,
        log_panel,
        log_buffer,
        status_label,
    }
}
