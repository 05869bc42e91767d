//! Turns schedule text into LaTeX-safe text.
//!
//! Accented letters become LaTeX accent commands so the book compiles with a
//! plain 8-bit font setup. A handful of HTML tags from abstracts are mapped
//! to LaTeX or dropped.

fn accent(c: char) -> Option<&'static str> {
    Some(match c {
        'á' => "\\'{a}",
        'à' => "\\`{a}",
        'À' => "\\`{A}",
        'ä' => "\\\"{a}",
        'å' => "\\r{a}",
        'ă' => "\\u{a}",
        'ç' => "\\c{c}",
        'ć' => "\\'{c}",
        'é' => "\\'{e}",
        'É' => "\\'{E}",
        'è' => "\\`{e}",
        'ë' => "\\\"{e}",
        'ě' => "\\v{e}",
        'í' => "\\'{i}",
        'ï' => "\\\"{\\i}",
        'ñ' => "\\~{n}",
        'ó' => "\\'{o}",
        'ò' => "\\`{o}",
        'ö' => "\\\"{o}",
        'ø' => "\\o{}",
        'ř' => "\\v{r}",
        'š' => "\\v{s}",
        'Š' => "\\v{S}",
        'ß' => "\\ss{}",
        'ú' => "\\'{u}",
        'ü' => "\\\"{u}",
        'û' => "\\^{u}",
        'ý' => "\\'{y}",
        'ž' => "\\v{z}",
        // Approximations for glyphs the book font lacks.
        '⨍' => "f",
        'б' => "b",
        _ => return None,
    })
}

fn special(c: char) -> Option<&'static str> {
    Some(match c {
        '—' => "\\textemdash{}",
        '…' => "\\dots{}",
        '’' => "'",
        '#' => "\\#",
        '&' => "\\&",
        '_' => "\\_",
        '%' => "\\%",
        '$' => "\\$",
        _ => return None,
    })
}

const TAGS: &[(&str, &str)] = &[
    ("<em>", "\\textbf{"),
    ("</em>", "}"),
    ("<ul>", ""),
    ("</li></ul>", "."),
    ("</ul>", ""),
    ("<li>", ""),
    ("</li>", ";"),
];

/// Escapes `text` for use in a LaTeX document body.
pub fn latexify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match accent(c).or_else(|| special(c)) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    TAGS.iter()
        .fold(out, |acc, &(tag, replacement)| acc.replace(tag, replacement))
}

/// Escapes a talk title; a spaced hyphen becomes an en dash.
pub fn latex_title(text: &str) -> String {
    latexify(text).replace(" - ", " -- ")
}

/// Escapes an HTML abstract, turning paragraphs into blank-line separated
/// LaTeX paragraphs.
pub fn latex_paragraphs(html: &str) -> String {
    latexify(html).replace("<p>", "").replace("</p>", "\n")
}
