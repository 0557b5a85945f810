use super::document::DocumentId;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNewTab,
    FileOpen,
    FileSaveTxt,
    FileSaveDocx,
    FileSavePdf,
    FileQuit,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,

    // Format
    FormatBold,
    FormatItalic,
    FormatTextColor,

    // View
    ToggleDarkMode,

    // Tabs
    TabSwitch(DocumentId),
    TabClose(DocumentId),
    TabCloseActive,
    TabNext,
    TabPrevious,

    // Buffer notifications
    BufferModified(DocumentId),
}
