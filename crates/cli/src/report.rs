use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use toolbelt::files::LineCount;
use toolbelt::geom2::{Contact, Point, Side};

/// Parse `"x,y x,y x,y"` (whitespace or `;` between vertices).
pub fn parse_vertices(s: &str) -> Result<Vec<Point>> {
    let verts = s
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            let (x, y) = tok
                .split_once(',')
                .ok_or_else(|| anyhow!("vertex {tok:?} is not of the form x,y"))?;
            let x: f64 = x.trim().parse().with_context(|| format!("bad x in {tok:?}"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("bad y in {tok:?}"))?;
            Ok(Point::new(x, y))
        })
        .collect::<Result<Vec<_>>>()?;
    if verts.is_empty() {
        bail!("no vertices given");
    }
    Ok(verts)
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactJson {
    VertexInside { polygon: &'static str, vertex: usize },
    EdgeCrossing { edge_a: usize, edge_b: usize },
}

impl From<Contact> for ContactJson {
    fn from(c: Contact) -> Self {
        match c {
            Contact::VertexInside { of, vertex } => ContactJson::VertexInside {
                polygon: match of {
                    Side::A => "a",
                    Side::B => "b",
                },
                vertex,
            },
            Contact::EdgeCrossing { edge_a, edge_b } => ContactJson::EdgeCrossing { edge_a, edge_b },
        }
    }
}

#[derive(Serialize)]
pub struct CollideJson {
    pub collides: bool,
    pub contact: Option<ContactJson>,
}

impl CollideJson {
    pub fn new(contact: Option<Contact>) -> Self {
        Self {
            collides: contact.is_some(),
            contact: contact.map(ContactJson::from),
        }
    }
}

#[derive(Serialize)]
pub struct WordJson<'a> {
    pub word: &'a str,
    pub count: usize,
}

#[derive(Serialize)]
pub struct LinesJson<'a> {
    pub file: &'a str,
    pub lines: usize,
}

pub fn words_json(words: &[(String, usize)]) -> Vec<WordJson<'_>> {
    words
        .iter()
        .map(|(w, c)| WordJson {
            word: w,
            count: *c,
        })
        .collect()
}

pub fn lines_json(counts: &[LineCount]) -> Vec<LinesJson<'_>> {
    counts
        .iter()
        .map(|lc| LinesJson {
            file: &lc.name,
            lines: lc.lines,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn parses_space_and_semicolon_lists() {
        let v = parse_vertices("0,0 4,0;4,4  0,4").unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v[2], Point::new(4.0, 4.0));
        let err = parse_vertices("1 2,3 4,5").unwrap_err();
        assert!(err.to_string().contains("not of the form"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_vertices("").is_err());
        assert!(parse_vertices("1,a 2,3 3,4").is_err());
    }

    #[test]
    fn collide_json_shape() {
        let j = CollideJson::new(Some(Contact::VertexInside {
            of: Side::B,
            vertex: 3,
        }));
        let v: Value = serde_json::to_value(&j).unwrap();
        assert_eq!(
            v,
            json!({"collides": true, "contact": {"kind": "vertex_inside", "polygon": "b", "vertex": 3}})
        );
        let v: Value = serde_json::to_value(CollideJson::new(None)).unwrap();
        assert_eq!(v, json!({"collides": false, "contact": null}));
    }
}
