//! Text document encoding and decoding.
//!
//! A document holds one object per line:
//!
//! ```text
//! LINE sx sy ex ey g b r
//! CIRCLE cx cy radius r g b
//! FCIRCLE cx cy radius outR outG outB areaR areaG areaB
//! ```
//!
//! The line color is stored green, blue, red. Files written by earlier versions of
//! the editor are read with that layout, so the order is kept for compatibility.

use super::color::Color;
use super::object::{Circle, FilledCircle, GeometricalObject, Line};
use log::warn;
use thiserror::Error;

const LINE_FIELDS: [&str; 7] = ["start-x", "start-y", "end-x", "end-y", "green", "blue", "red"];
const CIRCLE_FIELDS: [&str; 6] = ["center-x", "center-y", "radius", "red", "green", "blue"];
const FCIRCLE_FIELDS: [&str; 9] = [
    "center-x",
    "center-y",
    "radius",
    "outline-red",
    "outline-green",
    "outline-blue",
    "area-red",
    "area-green",
    "area-blue",
];

/// Property order used by the edit flow for lines (plain red, green, blue).
const LINE_EDIT_FIELDS: [&str; 7] = [
    "start-x", "start-y", "end-x", "end-y", "red", "green", "blue",
];

/// Why a field list could not be turned into an object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatReason {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} is not an integer: '{value}'")]
    NotInteger { field: &'static str, value: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: i32 },
}

/// Errors produced while decoding a document line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Wrong field count, a non-integer field, or a value outside its range.
    #[error("invalid {shape} definition: {reason}")]
    Format {
        shape: &'static str,
        reason: FormatReason,
    },

    /// The leading object name is not one of `line`, `circle`, `fcircle`.
    #[error("\"{name}\" object does not exist")]
    UnknownShape { name: String },
}

impl DecodeError {
    pub fn is_format(&self) -> bool {
        matches!(self, DecodeError::Format { .. })
    }
}

/// One document line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number within the document
    pub line_number: usize,
    /// The raw line text
    pub text: String,
    pub error: DecodeError,
}

/// Outcome of decoding a whole document: the good objects in order, plus every failure.
#[derive(Debug, Default)]
pub struct DecodedDocument {
    pub objects: Vec<GeometricalObject>,
    pub failures: Vec<LineFailure>,
}

impl GeometricalObject {
    /// Canonical one-line text form of this object.
    pub fn as_text(&self) -> String {
        match self {
            GeometricalObject::Line(line) => format!(
                "LINE {} {} {} {} {} {} {}",
                line.start_x,
                line.start_y,
                line.end_x,
                line.end_y,
                line.color.g,
                line.color.b,
                line.color.r
            ),
            GeometricalObject::Circle(circle) => format!(
                "CIRCLE {} {} {} {} {} {}",
                circle.center_x,
                circle.center_y,
                circle.radius,
                circle.color.r,
                circle.color.g,
                circle.color.b
            ),
            GeometricalObject::FilledCircle(circle) => format!(
                "FCIRCLE {} {} {} {} {} {} {} {} {}",
                circle.center_x,
                circle.center_y,
                circle.radius,
                circle.outline_color.r,
                circle.outline_color.g,
                circle.outline_color.b,
                circle.area_color.r,
                circle.area_color.g,
                circle.area_color.b
            ),
        }
    }

    /// Replaces all properties from edit-form fields, leaving the index untouched.
    ///
    /// Field order: line `sx sy ex ey r g b`, circle `cx cy radius r g b`, filled
    /// circle `cx cy radius outR outG outB areaR areaG areaB`. Every field is
    /// validated before anything is written, so on error the object is unchanged.
    pub fn apply_fields(&mut self, fields: &[&str]) -> Result<(), DecodeError> {
        match self {
            GeometricalObject::Line(line) => {
                let [sx, sy, ex, ey, r, g, b] = parse_fields("LINE", &LINE_EDIT_FIELDS, fields)?;
                let color = color_from("LINE", &LINE_EDIT_FIELDS[4..], [r, g, b])?;
                line.start_x = sx;
                line.start_y = sy;
                line.end_x = ex;
                line.end_y = ey;
                line.color = color;
            }
            GeometricalObject::Circle(circle) => {
                let edited = circle_from(fields)?;
                circle.center_x = edited.center_x;
                circle.center_y = edited.center_y;
                circle.radius = edited.radius;
                circle.color = edited.color;
            }
            GeometricalObject::FilledCircle(circle) => {
                let edited = filled_circle_from(fields)?;
                circle.center_x = edited.center_x;
                circle.center_y = edited.center_y;
                circle.radius = edited.radius;
                circle.outline_color = edited.outline_color;
                circle.area_color = edited.area_color;
            }
        }
        Ok(())
    }
}

/// Decodes a single document line.
///
/// The object name is matched case-insensitively; surrounding whitespace and runs
/// of whitespace between fields are ignored.
pub fn decode_object(line: &str) -> Result<GeometricalObject, DecodeError> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().unwrap_or("");
    let fields: Vec<&str> = tokens.collect();

    match name.to_lowercase().as_str() {
        "line" => line_from(&fields).map(GeometricalObject::from),
        "circle" => circle_from(&fields).map(GeometricalObject::from),
        "fcircle" => filled_circle_from(&fields).map(GeometricalObject::from),
        _ => Err(DecodeError::UnknownShape {
            name: name.to_string(),
        }),
    }
}

/// Decodes every line of a document independently.
///
/// A line that fails is recorded in [`DecodedDocument::failures`] and decoding
/// carries on with the next one. Blank lines are skipped.
pub fn decode_document(text: &str) -> DecodedDocument {
    let mut decoded = DecodedDocument::default();

    for (offset, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        match decode_object(raw) {
            Ok(object) => decoded.objects.push(object),
            Err(error) => {
                let line_number = offset + 1;
                warn!("Skipping line {}: {}", line_number, error);
                decoded.failures.push(LineFailure {
                    line_number,
                    text: raw.to_string(),
                    error,
                });
            }
        }
    }

    decoded
}

/// Encodes objects in order, one per line, each line terminated by `\n`.
pub fn encode_document<'a, I>(objects: I) -> String
where
    I: IntoIterator<Item = &'a GeometricalObject>,
{
    let mut text = String::new();
    for object in objects {
        text.push_str(&object.as_text());
        text.push('\n');
    }
    text
}

fn line_from(fields: &[&str]) -> Result<Line, DecodeError> {
    let [sx, sy, ex, ey, g, b, r] = parse_fields("LINE", &LINE_FIELDS, fields)?;
    let color = Color::new(
        component("LINE", LINE_FIELDS[6], r)?,
        component("LINE", LINE_FIELDS[4], g)?,
        component("LINE", LINE_FIELDS[5], b)?,
    );
    Ok(Line::new(sx, sy, ex, ey, color))
}

fn circle_from(fields: &[&str]) -> Result<Circle, DecodeError> {
    let [cx, cy, radius, r, g, b] = parse_fields("CIRCLE", &CIRCLE_FIELDS, fields)?;
    let radius = non_negative("CIRCLE", CIRCLE_FIELDS[2], radius)?;
    let color = color_from("CIRCLE", &CIRCLE_FIELDS[3..], [r, g, b])?;
    Ok(Circle::new(cx, cy, radius, color))
}

fn filled_circle_from(fields: &[&str]) -> Result<FilledCircle, DecodeError> {
    let [cx, cy, radius, or, og, ob, ar, ag, ab] =
        parse_fields("FCIRCLE", &FCIRCLE_FIELDS, fields)?;
    let radius = non_negative("FCIRCLE", FCIRCLE_FIELDS[2], radius)?;
    let outline = color_from("FCIRCLE", &FCIRCLE_FIELDS[3..6], [or, og, ob])?;
    let area = color_from("FCIRCLE", &FCIRCLE_FIELDS[6..], [ar, ag, ab])?;
    Ok(FilledCircle::new(cx, cy, radius, outline, area))
}

fn parse_fields<const N: usize>(
    shape: &'static str,
    names: &[&'static str; N],
    fields: &[&str],
) -> Result<[i32; N], DecodeError> {
    if fields.len() != N {
        return Err(DecodeError::Format {
            shape,
            reason: FormatReason::FieldCount {
                expected: N,
                found: fields.len(),
            },
        });
    }

    let mut values = [0; N];
    for ((slot, field), value) in values.iter_mut().zip(names.iter()).zip(fields) {
        *slot = value.trim().parse().map_err(|_| DecodeError::Format {
            shape,
            reason: FormatReason::NotInteger {
                field: *field,
                value: value.to_string(),
            },
        })?;
    }
    Ok(values)
}

/// Builds a color from `[r, g, b]` values named by `names` (red, green, blue order).
fn color_from(
    shape: &'static str,
    names: &[&'static str],
    [r, g, b]: [i32; 3],
) -> Result<Color, DecodeError> {
    Ok(Color::new(
        component(shape, names[0], r)?,
        component(shape, names[1], g)?,
        component(shape, names[2], b)?,
    ))
}

fn component(shape: &'static str, field: &'static str, value: i32) -> Result<u8, DecodeError> {
    u8::try_from(value).map_err(|_| DecodeError::Format {
        shape,
        reason: FormatReason::OutOfRange { field, value },
    })
}

fn non_negative(shape: &'static str, field: &'static str, value: i32) -> Result<i32, DecodeError> {
    if value < 0 {
        Err(DecodeError::Format {
            shape,
            reason: FormatReason::OutOfRange { field, value },
        })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawingModel;
    use crate::draw::color::{BLACK, BLUE, RED, WHITE};

    #[test]
    fn line_text_stores_green_blue_red() {
        let line: GeometricalObject = Line::new(1, 2, 3, 4, Color::new(10, 20, 30)).into();
        assert_eq!(line.as_text(), "LINE 1 2 3 4 20 30 10");
    }

    #[test]
    fn circle_texts_store_red_green_blue() {
        let circle: GeometricalObject = Circle::new(5, 6, 7, Color::new(1, 2, 3)).into();
        assert_eq!(circle.as_text(), "CIRCLE 5 6 7 1 2 3");

        let filled: GeometricalObject = FilledCircle::new(5, 6, 7, RED, BLUE).into();
        assert_eq!(filled.as_text(), "FCIRCLE 5 6 7 255 0 0 0 0 255");
    }

    #[test]
    fn decode_reads_line_color_positions() {
        let object = decode_object("LINE 0 0 10 10 255 0 0").unwrap();
        let GeometricalObject::Line(line) = object else {
            panic!("expected a line");
        };
        assert_eq!(line.color, Color::new(0, 255, 0));
    }

    #[test]
    fn boundary_values_round_trip() {
        let objects: Vec<GeometricalObject> = vec![
            Line::new(-5, -7, 0, i32::MAX, Color::new(0, 128, 255)).into(),
            Circle::new(-1, -1, 0, BLACK).into(),
            FilledCircle::new(i32::MIN, 3, 0, WHITE, BLACK).into(),
            FilledCircle::new(4, 4, 255, Color::new(255, 0, 1), Color::new(0, 255, 254)).into(),
        ];

        for object in objects {
            let decoded = decode_object(&object.as_text()).unwrap();
            assert_eq!(decoded, object, "round trip of {}", object.as_text());
        }
    }

    #[test]
    fn objects_held_by_a_model_round_trip() {
        let mut model = DrawingModel::new();
        model.add(Circle::new(0, 0, 5, RED).into());
        model.add(Line::new(1, 2, 3, 4, BLUE).into());
        model.add(FilledCircle::new(7, 8, 9, RED, BLUE).into());

        for object in &model {
            assert!(object.index().is_some());
            let decoded = decode_object(&object.as_text()).unwrap();
            assert_eq!(&decoded, object, "round trip of {}", object.as_text());
        }
    }

    #[test]
    fn extreme_extents_decode_and_enter_a_model() {
        let mut model = DrawingModel::new();
        for text in [
            "CIRCLE 2147483647 0 1 0 0 0",
            "LINE -2147483648 0 2147483647 0 0 0 0",
            "FCIRCLE -2147483648 -2147483648 2147483647 0 0 0 0 0 0",
        ] {
            let object = decode_object(text).unwrap();
            assert_eq!(object.bounds(), None, "{}", text);
            model.add(object);
        }
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn names_are_case_insensitive_and_whitespace_tolerant() {
        assert!(decode_object("line 1 2 3 4 5 6 7").is_ok());
        assert!(decode_object("  Circle\t1  2 3 4 5 6 ").is_ok());
        assert!(decode_object("fCiRcLe 1 2 3 4 5 6 7 8 9").is_ok());
    }

    #[test]
    fn wrong_field_count_is_a_format_error() {
        let error = decode_object("LINE 1 2 3").unwrap_err();
        assert_eq!(
            error,
            DecodeError::Format {
                shape: "LINE",
                reason: FormatReason::FieldCount {
                    expected: 7,
                    found: 3
                }
            }
        );
    }

    #[test]
    fn non_integer_and_out_of_range_fields_are_format_errors() {
        assert!(decode_object("CIRCLE 1 2 x 4 5 6").unwrap_err().is_format());
        assert!(decode_object("CIRCLE 1 2 3 4 5 256").unwrap_err().is_format());
        assert!(decode_object("CIRCLE 1 2 -3 4 5 6").unwrap_err().is_format());
        assert!(decode_object("FCIRCLE 1 2 3 4 5 6 7 8 -1").unwrap_err().is_format());
    }

    #[test]
    fn unknown_names_are_reported() {
        assert_eq!(
            decode_object("TRIANGLE 1 2 3").unwrap_err(),
            DecodeError::UnknownShape {
                name: "TRIANGLE".to_string()
            }
        );
    }

    #[test]
    fn document_decoding_skips_and_continues() {
        let text = "LINE 1 2 3\nTRIANGLE 1 2 3\n\nCIRCLE 5 5 3 0 255 0\nLINE 0 0 1 1 0 0 0\n";
        let decoded = decode_document(text);

        assert_eq!(decoded.objects.len(), 2);
        assert_eq!(decoded.objects[0].format_name(), "CIRCLE");
        assert_eq!(decoded.objects[1].format_name(), "LINE");

        let numbers: Vec<usize> = decoded.failures.iter().map(|f| f.line_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(decoded.failures[0].error.is_format());
        assert!(matches!(
            decoded.failures[1].error,
            DecodeError::UnknownShape { .. }
        ));
    }

    #[test]
    fn encode_document_writes_one_line_per_object() {
        let objects: Vec<GeometricalObject> = vec![
            Line::new(0, 0, 10, 10, RED).into(),
            Circle::new(5, 5, 3, BLUE).into(),
        ];
        assert_eq!(
            encode_document(&objects),
            "LINE 0 0 10 10 0 0 255\nCIRCLE 5 5 3 0 0 255\n"
        );
    }

    #[test]
    fn apply_fields_uses_plain_rgb_for_lines() {
        let mut line: GeometricalObject = Line::new(0, 0, 0, 0, BLACK).into();
        line.apply_fields(&["1", "2", "3", "4", "10", "20", "30"]).unwrap();
        assert_eq!(
            line,
            GeometricalObject::from(Line::new(1, 2, 3, 4, Color::new(10, 20, 30)))
        );
    }

    #[test]
    fn apply_fields_is_all_or_nothing() {
        let original: GeometricalObject = FilledCircle::new(1, 1, 1, RED, BLUE).into();
        let mut edited = original.clone();

        let error = edited
            .apply_fields(&["9", "9", "9", "0", "0", "0", "0", "0", "nope"])
            .unwrap_err();
        assert!(error.is_format());
        assert_eq!(edited, original);

        assert!(edited.apply_fields(&["1", "2"]).is_err());
        assert_eq!(edited, original);
    }
}
