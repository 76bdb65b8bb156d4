//! File-input classification.
//!
//! Decides what kind of synthetic file suits a file input, from its
//! `accept` attribute and name. Building and attaching the actual payload
//! is the host's job.

use formfill_core::controls::ControlDescriptor;
use formfill_core::traits::FileKind;

pub fn classify_file(control: &ControlDescriptor) -> FileKind {
    let accept = control.constraints.accept.as_deref().unwrap_or("");
    let name = control.name.to_lowercase();

    if accept == "image/*"
        || accept.contains("png")
        || name.contains("photo")
        || name.contains("image")
    {
        return FileKind::Image;
    }

    if accept.contains("pdf") || name.contains("pdf") || name.contains("document") {
        return FileKind::Pdf;
    }

    FileKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_core::controls::{ControlId, ControlKind};

    fn file_control(accept: Option<&str>, name: &str) -> ControlDescriptor {
        let mut control = ControlDescriptor::new(ControlId(1), ControlKind::File).with_name(name);
        control.constraints.accept = accept.map(str::to_string);
        control
    }

    #[test]
    fn test_image_by_accept() {
        assert_eq!(classify_file(&file_control(Some("image/*"), "upload")), FileKind::Image);
        assert_eq!(classify_file(&file_control(Some(".png,.jpg"), "upload")), FileKind::Image);
    }

    #[test]
    fn test_image_by_name() {
        assert_eq!(classify_file(&file_control(None, "profile_photo")), FileKind::Image);
    }

    #[test]
    fn test_pdf_by_accept_or_name() {
        assert_eq!(classify_file(&file_control(Some("application/pdf"), "upload")), FileKind::Pdf);
        assert_eq!(classify_file(&file_control(None, "supporting_document")), FileKind::Pdf);
    }

    #[test]
    fn test_plain_text_fallback() {
        assert_eq!(classify_file(&file_control(None, "attachment")), FileKind::Text);
    }
}
