//! Benchmark harness: one ImGui context, one source string, one raw buffer,
//! and the six scenario operations the external harness times.

use std::os::raw::c_char;
use std::path::PathBuf;
use std::ptr;

use dear_imgui_rs::{Context, InputTextFlags};
use dear_imgui_sys as sys;
use tracing::debug;

use crate::buffer::FixedTextBuffer;
use crate::error::{SetupError, SetupResult};
use crate::labels::LabelSet;
use crate::policy::{CopyIn, CopyOut};
use crate::{BATCH_SIZE, BUF_SIZE, INITIAL_TEXT};

/// Opaque per-frame output.
///
/// Wraps the draw data pointer produced by frame finalization. The caller is
/// expected to discard it immediately; it stays valid only until the next
/// frame begins. Side effects on the underlying context are the real result.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    raw: *const sys::ImDrawData,
}

impl FrameResult {
    fn new(raw: *const sys::ImDrawData) -> Self {
        Self { raw }
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    pub fn as_ptr(&self) -> *const sys::ImDrawData {
        self.raw
    }
}

/// Owns everything one benchmark run needs: the active Dear ImGui context,
/// the label set, the source string, and the fixed raw buffer.
///
/// Dear ImGui allows one active context per process, so at most one harness
/// may exist at a time; creating a second fails with a setup error. Teardown
/// is `Drop`: the context deactivates and destroys itself, the buffer and
/// labels free with the struct.
pub struct InputTextBench {
    ctx: Context,
    source: String,
    buffer: FixedTextBuffer,
    labels: LabelSet,
}

impl InputTextBench {
    /// Sets up the harness: label set, buffer preloaded with
    /// [`INITIAL_TEXT`], and a headless context with a fixed 1920x1080
    /// virtual display and a built default font atlas.
    ///
    /// Every failure here is fatal to the run; nothing is retried.
    pub fn new() -> SetupResult<Self> {
        let labels = LabelSet::generate(BATCH_SIZE)?;
        let source = INITIAL_TEXT.to_string();
        let buffer = FixedTextBuffer::new(BUF_SIZE, &source)?;

        let mut ctx = Context::try_create().map_err(|e| SetupError::Context {
            reason: e.to_string(),
        })?;
        // No .ini persistence: benches must not touch the filesystem.
        ctx.set_ini_filename::<PathBuf>(None)
            .map_err(|e| SetupError::Context {
                reason: e.to_string(),
            })?;
        {
            let io = ctx.io_mut();
            io.set_display_size([1920.0, 1080.0]);
            io.set_delta_time(1.0 / 60.0);
        }
        let mut atlas = ctx.font_atlas_mut();
        atlas.add_font_default(None);
        if !atlas.build() {
            return Err(SetupError::Context {
                reason: "font atlas build failed".to_string(),
            });
        }

        debug!(
            batch = BATCH_SIZE,
            buf_size = BUF_SIZE,
            "input-text harness ready"
        );
        Ok(Self {
            ctx,
            source,
            buffer,
            labels,
        })
    }

    /// Current source string, as the scenarios see it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current raw buffer contents, decoded up to the terminator.
    pub fn buffer_contents(&self) -> String {
        self.buffer.decode()
    }

    /// Managed-string baseline: the binding owns copy-in and copy-out for
    /// every slot.
    pub fn managed_string(&mut self) -> FrameResult {
        self.managed_frame(InputTextFlags::NONE)
    }

    /// Managed-string variant with `EnterReturnsTrue`, so the widget only
    /// signals on explicit completion. Same marshaling as
    /// [`managed_string`](Self::managed_string) otherwise.
    pub fn managed_string_enter_flag(&mut self) -> FrameResult {
        self.managed_frame(InputTextFlags::ENTER_RETURNS_TRUE)
    }

    /// Raw buffer handed to the widget as-is, no copies in either direction.
    pub fn raw_buffer_reuse(&mut self) -> FrameResult {
        self.raw_frame(CopyIn::Never, CopyOut::Never)
    }

    /// Raw buffer with copy-in before every slot and no write-back.
    /// Comparable to the managed path when the value is copied in but never
    /// out; against
    /// [`raw_buffer_minimal_copies`](Self::raw_buffer_minimal_copies) it
    /// isolates the cost of the edit-completion query itself.
    pub fn raw_buffer_copy_in(&mut self) -> FrameResult {
        self.raw_frame(CopyIn::EverySlot, CopyOut::Never)
    }

    /// Raw buffer with copy-in every slot and write-back only when the widget
    /// reports the edit completed. The realistic production pattern.
    pub fn raw_buffer_minimal_copies(&mut self) -> FrameResult {
        self.raw_frame(CopyIn::EverySlot, CopyOut::OnEditComplete)
    }

    /// Raw buffer with copy-in and unconditional write-back on every slot.
    pub fn raw_buffer_full_copies(&mut self) -> FrameResult {
        self.raw_frame(CopyIn::EverySlot, CopyOut::EverySlot)
    }

    fn managed_frame(&mut self, flags: InputTextFlags) -> FrameResult {
        let ui = self.ctx.frame();
        let _ = ui.window("Window").build(|| {
            for i in 0..self.labels.len() {
                let _ = ui
                    .input_text(self.labels.as_str(i), &mut self.source)
                    .flags(flags)
                    .build();
            }
        });
        self.finish_frame()
    }

    fn raw_frame(&mut self, copy_in: CopyIn, copy_out: CopyOut) -> FrameResult {
        let ui = self.ctx.frame();
        let _ = ui.window("Window").build(|| {
            for i in 0..self.labels.len() {
                if copy_in.applies() {
                    self.buffer.encode(&self.source);
                }
                let _ = unsafe {
                    sys::igInputText(
                        self.labels.as_c_ptr(i),
                        self.buffer.as_mut_ptr() as *mut c_char,
                        self.buffer.writable_len(),
                        InputTextFlags::ENTER_RETURNS_TRUE.bits(),
                        None,
                        ptr::null_mut(),
                    )
                };
                if copy_out.applies(ui.is_item_deactivated_after_edit()) {
                    self.source = self.buffer.decode();
                }
            }
        });
        self.finish_frame()
    }

    fn finish_frame(&mut self) -> FrameResult {
        let draw_data = self.ctx.render();
        FrameResult::new(ptr::from_ref(draw_data).cast())
    }
}

impl Drop for InputTextBench {
    fn drop(&mut self) {
        debug!("input-text harness torn down");
    }
}
