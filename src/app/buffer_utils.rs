/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` calls FLTK's `Fl_Text_Buffer_text()`,
/// copies the returned `malloc()`'d C string into a Rust String, and never
/// frees the original pointer - leaking the full buffer size on every call.
/// This helper calls the FFI directly and frees the allocation itself.
pub fn buffer_text(buf: &fltk::text::TextBuffer) -> String {
    extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `Fl_Text_Buffer_text` returns a malloc'd, null-terminated C
    // string (or null for an empty buffer). The bytes are copied into a Rust
    // String before the allocation is handed to `free`, which matches FLTK's
    // allocator. `buf.as_ptr()` stays valid for the duration of the call
    // because `buf` is borrowed.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
