//! Printable HTML page assembly.

use common::DateTime;
use service::{render::html, Company};

/// Assembles a self-contained printable HTML page around the provided
/// marked-up `document`.
///
/// The signature block (city, today's date and the company name) is
/// stamped here, at print time, so the persisted document itself stays
/// free of "now"-derived data.
#[must_use]
pub fn page(title: &str, document: &str, company: &Company) -> String {
    let title = html::escape(title);
    let content = html::to_html(document);
    let city = html::escape(&company.city).to_uppercase();
    let company_name = html::escape(&company.name);
    let date = DateTime::now().to_brazilian_date();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         @page {{ size: A4; margin: 25mm 20mm; }}\n\
         body {{\n\
           font-family: \"Times New Roman\", serif;\n\
           font-size: 12pt;\n\
           line-height: 1.6;\n\
           max-width: 170mm;\n\
           margin: 0 auto;\n\
           padding: 24px;\n\
           text-align: justify;\n\
         }}\n\
         .signature {{ margin-top: 64px; text-align: center; }}\n\
         .signature .line {{\n\
           display: inline-block;\n\
           min-width: 60mm;\n\
           border-top: 1px solid #000;\n\
           padding-top: 4px;\n\
         }}\n\
         @media print {{ body {{ padding: 0; }} }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <main>{content}</main>\n\
         <footer class=\"signature\">\n\
         <p>{city}, {date}</p>\n\
         <p><span class=\"line\">{company_name}</span></p>\n\
         </footer>\n\
         </body>\n\
         </html>\n"
    )
}
