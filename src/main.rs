use fltk::{app, enums::Event, prelude::*};

use quillpad::app::format::FormatKind;
use quillpad::app::messages::Message;
use quillpad::app::state::AppState;
use quillpad::ui::main_window::build_main_window;
use quillpad::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    let mut state = AppState::new(widgets, sender);

    // Route the window manager's close button through the quit path
    state.window.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::FileQuit);
        }
    });

    state.window.show();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNewTab => state.file_new_tab(),
                Message::FileOpen => state.file_open(),
                Message::FileSaveTxt => state.file_save_txt(),
                Message::FileSaveDocx => state.file_save_docx(),
                Message::FileSavePdf => state.file_save_pdf(),
                Message::FileQuit => fltk_app.quit(),

                Message::EditUndo => state.edit_undo(),
                Message::EditRedo => state.edit_redo(),
                Message::EditCut => state.edit_cut(),
                Message::EditCopy => state.edit_copy(),
                Message::EditPaste => state.edit_paste(),

                Message::FormatBold => state.apply_to_selection(FormatKind::Bold),
                Message::FormatItalic => state.apply_to_selection(FormatKind::Italic),
                Message::FormatTextColor => state.format_pick_color(),

                Message::ToggleDarkMode => state.toggle_theme(),

                Message::TabSwitch(id) => {
                    state.switch_to_document(id);
                    state.rebuild_tab_bar();
                }
                Message::TabClose(id) => state.close_tab(id),
                Message::TabCloseActive => {
                    if let Some(id) = state.tab_manager.active_id() {
                        state.close_tab(id);
                    }
                }
                Message::TabNext => state.switch_to_next_tab(),
                Message::TabPrevious => state.switch_to_previous_tab(),

                Message::BufferModified(id) => state.on_buffer_modified(id),
            }
        }
    }
}
