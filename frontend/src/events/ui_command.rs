use vision::ModelVariant;

/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCommand {
    // --- Session lifecycle ---
    StartDetection,
    StopDetection,

    // --- Capture ---
    /// Save the most recent annotated frame to disk
    TakeScreenshot,

    // --- Settings ---
    /// New confidence threshold from the slider
    SetConfidence(f32),
    /// Model variant picked in the selector (only while stopped)
    SelectModel(ModelVariant),

    // --- Detection log ---
    ClearLog,
}
