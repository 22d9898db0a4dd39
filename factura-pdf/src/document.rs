use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::content::Content;
use crate::file::PdfFile;
use crate::fonts::Font;
use crate::object::{ObjId, Object};

/// A4 portrait in PostScript points.
pub const A4_WIDTH: f64 = 595.28;
pub const A4_HEIGHT: f64 = 841.89;

const CATALOG_ID: ObjId = ObjId(1);
const PAGES_ID: ObjId = ObjId(2);
const FONT_IDS: [(ObjId, Font); 3] = [
    (ObjId(3), Font::Helvetica),
    (ObjId(4), Font::HelveticaBold),
    (ObjId(5), Font::HelveticaOblique),
];
const FIRST_PAGE_OBJ: u32 = 6;

/// Multi-page PDF builder over any `Write` target.
///
/// Pages flush to the writer as they end, so memory stays flat no
/// matter how many pages an invoice runs to; only the pages tree,
/// catalog, and xref wait for [`Document::finish`].
pub struct Document<W: Write> {
    file: PdfFile<W>,
    info: Vec<(&'static str, String)>,
    page_ids: Vec<ObjId>,
    page: Option<Page>,
    next_obj: u32,
    compress: bool,
}

struct Page {
    width: f64,
    height: f64,
    content: Content,
}

impl<W: Write> Document<W> {
    /// Write the header and the shared font objects, then wait for
    /// pages. Fonts carry WinAnsiEncoding so the Latin-1 octal
    /// escapes in text strings map to the right glyphs.
    pub fn new(writer: W) -> io::Result<Self> {
        let mut file = PdfFile::new(writer);
        file.write_header()?;
        for (id, font) in FONT_IDS {
            let dict = Object::dict(vec![
                ("Type", Object::Name("Font")),
                ("Subtype", Object::Name("Type1")),
                ("BaseFont", Object::Name(font.base_name())),
                ("Encoding", Object::Name("WinAnsiEncoding")),
            ]);
            file.write_object(id, &dict)?;
        }
        Ok(Document {
            file,
            info: Vec::new(),
            page_ids: Vec::new(),
            page: None,
            next_obj: FIRST_PAGE_OBJ,
            compress: false,
        })
    }

    /// Deflate page content streams. Off by default so tests and
    /// debugging can read the operators; exports turn it on.
    pub fn set_compression(&mut self, on: bool) {
        self.compress = on;
    }

    /// Add a document info entry (e.g. "Title", "Creator").
    pub fn set_info(&mut self, key: &'static str, value: &str) {
        self.info.push((key, value.to_string()));
    }

    /// Start a page; any open page is flushed first.
    pub fn begin_page(&mut self, width: f64, height: f64) -> io::Result<()> {
        if self.page.is_some() {
            self.end_page()?;
        }
        self.page = Some(Page {
            width,
            height,
            content: Content::new(),
        });
        Ok(())
    }

    /// Drawing surface of the open page.
    ///
    /// Panics if called between pages; the renderer always draws
    /// inside a begin_page/end_page pair.
    pub fn content(&mut self) -> &mut Content {
        &mut self.page.as_mut().expect("no open page").content
    }

    /// Pages flushed so far plus the open one.
    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.page.is_some())
    }

    /// Flush the open page: content stream plus page dictionary.
    pub fn end_page(&mut self) -> io::Result<()> {
        let page = self.page.take().expect("no open page");

        let content_id = ObjId(self.next_obj);
        let page_id = ObjId(self.next_obj + 1);
        self.next_obj += 2;

        let ops = page.content.into_bytes();
        let stream = if self.compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&ops)?;
            Object::stream(
                vec![("Filter", Object::Name("FlateDecode"))],
                encoder.finish()?,
            )
        } else {
            Object::stream(vec![], ops)
        };
        self.file.write_object(content_id, &stream)?;

        let font_resources = FONT_IDS
            .iter()
            .map(|&(id, font)| (font.pdf_name(), Object::Ref(id)))
            .collect();
        let page_dict = Object::dict(vec![
            ("Type", Object::Name("Page")),
            ("Parent", Object::Ref(PAGES_ID)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.width),
                    Object::Real(page.height),
                ]),
            ),
            ("Contents", Object::Ref(content_id)),
            ("Resources", Object::dict(vec![("Font", Object::Dict(font_resources))])),
        ]);
        self.file.write_object(page_id, &page_dict)?;
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Close the document: info dictionary, pages tree, catalog,
    /// xref, trailer. Returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.page.is_some() {
            self.end_page()?;
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = ObjId(self.next_obj);
            self.next_obj += 1;
            let entries = self
                .info
                .iter()
                .map(|(key, value)| (*key, Object::text(value.clone())))
                .collect();
            self.file.write_object(id, &Object::Dict(entries))?;
            Some(id)
        };

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| Object::Ref(id)).collect();
        let pages = Object::dict(vec![
            ("Type", Object::Name("Pages")),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(self.page_ids.len() as i64)),
        ]);
        self.file.write_object(PAGES_ID, &pages)?;

        let catalog = Object::dict(vec![
            ("Type", Object::Name("Catalog")),
            ("Pages", Object::Ref(PAGES_ID)),
        ]);
        self.file.write_object(CATALOG_ID, &catalog)?;

        self.file.write_trailer(CATALOG_ID, info_id)?;
        Ok(self.file.into_inner())
    }
}
