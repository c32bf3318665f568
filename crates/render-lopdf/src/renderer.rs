use crate::error::RenderError;
use crate::helpers::{self, PageContext, font_resource_name, pdf_text_string};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use log::{debug, info};
use runbook_layout::LaidOutDocument;
use runbook_style::BuiltinFont;
use std::io::Write;

/// Entries of the PDF document information dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// Already in PDF date form, e.g. `D:20240115103000`.
    pub creation_date: Option<String>,
}

/// Writes laid-out pages as a PDF using only base-14 fonts.
///
/// Output is a pure function of the input: rendering the same document with
/// the same metadata twice yields identical bytes.
pub struct LopdfRenderer {
    metadata: DocumentMetadata,
    compress: bool,
}

impl LopdfRenderer {
    pub fn new(metadata: DocumentMetadata) -> Self {
        Self {
            metadata,
            compress: true,
        }
    }

    /// Whether content streams are Flate-compressed. On by default.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Builds the complete PDF object graph in memory.
    pub fn build_document(&self, laid_out: &LaidOutDocument) -> Result<Document, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in laid_out.fonts_used() {
            font_dict.set(font_resource_name(font), Object::Dictionary(font_dictionary(font)));
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            laid_out.page_width.into(),
            laid_out.page_height.into(),
        ];
        let mut page_ids = Vec::with_capacity(laid_out.pages.len());
        for page in &laid_out.pages {
            let mut ctx = PageContext::new(laid_out.page_height);
            for el in &page.elements {
                ctx.draw_element(el);
            }
            let content_id = doc.add_object(Stream::new(dictionary! {}, ctx.finish()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            debug!("Rendered page {} ({} elements)", page.number, page.elements.len());
            page_ids.push(page_id);
        }

        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
                "Count" => page_ids.len() as i64,
            }
            .into(),
        );

        let mut catalog = dictionary! { "Type" => "Catalog", "Pages" => pages_id };
        if let Some(outline_id) = helpers::build_outlines(
            &mut doc,
            &laid_out.outline,
            &page_ids,
            laid_out.page_height,
        ) {
            catalog.set("Outlines", outline_id);
            catalog.set("PageMode", "UseOutlines");
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        let info = self.info_dictionary();
        if !info.is_empty() {
            let info_id = doc.add_object(info);
            doc.trailer.set("Info", info_id);
        }

        if self.compress {
            doc.compress();
        }
        Ok(doc)
    }

    /// Renders `laid_out` and writes the finished file to `writer`.
    pub fn render<W: Write>(&self, laid_out: &LaidOutDocument, writer: &mut W) -> Result<(), RenderError> {
        let mut doc = self.build_document(laid_out)?;
        doc.save_to(writer)?;
        info!("Wrote PDF with {} pages", laid_out.pages.len());
        Ok(())
    }

    pub fn render_to_bytes(&self, laid_out: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.render(laid_out, &mut buffer)?;
        Ok(buffer)
    }

    fn info_dictionary(&self) -> Dictionary {
        let m = &self.metadata;
        let mut info = Dictionary::new();
        let fields = [
            ("Title", &m.title),
            ("Author", &m.author),
            ("Subject", &m.subject),
            ("Creator", &m.creator),
            ("Producer", &m.producer),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                info.set(key, pdf_text_string(value));
            }
        }
        if let Some(date) = &m.creation_date {
            info.set("CreationDate", pdf_text_string(date));
            info.set("ModDate", pdf_text_string(date));
        }
        info
    }
}

fn font_dictionary(font: BuiltinFont) -> Dictionary {
    let mut dict = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.postscript_name(),
    };
    // Symbolic fonts keep their built-in encoding.
    if !font.is_symbolic() {
        dict.set("Encoding", "WinAnsiEncoding");
    }
    dict
}
