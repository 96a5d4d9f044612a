//! Flat XML element to [`PropertyMap`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Value;

use super::PropertyMap;
use crate::error::{ModelError, Result};

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn read_attributes(e: &BytesStart<'_>, props: &mut PropertyMap) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        props.insert(key, value);
    }
    Ok(())
}

fn second_root() -> ModelError {
    ModelError::InvalidDocument("XML has more than one root element".into())
}

pub(crate) fn parse(xml: &str) -> Result<PropertyMap> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut props = PropertyMap::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    // Child element currently open at depth 2 and its accumulated text.
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                match depth {
                    1 => {
                        if seen_root {
                            return Err(second_root());
                        }
                        seen_root = true;
                        read_attributes(&e, &mut props)?;
                    }
                    2 => current = Some((element_name(&e), String::new())),
                    _ => tracing::debug!(element = %element_name(&e), depth, "Ignoring nested element"),
                }
            }
            Event::Empty(e) => match depth {
                0 => {
                    if seen_root {
                        return Err(second_root());
                    }
                    seen_root = true;
                    read_attributes(&e, &mut props)?;
                }
                1 => {
                    props.insert(element_name(&e), Value::Null);
                }
                _ => tracing::debug!(element = %element_name(&e), "Ignoring nested element"),
            },
            Event::Text(t) if depth == 2 => {
                if let Some((_, text)) = current.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) if depth == 2 => {
                if let Some((_, text)) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some((name, text)) = current.take() {
                        let value = if text.is_empty() {
                            Value::Null
                        } else {
                            Value::String(text)
                        };
                        props.insert(name, value);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(ModelError::InvalidDocument("XML has no root element".into()));
    }
    if depth != 0 {
        return Err(ModelError::InvalidDocument("XML ends inside an element".into()));
    }
    Ok(props)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_children_become_properties() {
        let props = parse(
            r#"<entry id="wf-1">
                 <name>Leave &amp; Holiday</name>
                 <version>2</version>
                 <category/>
                 <startFormKey></startFormKey>
                 <message><![CDATA[<hello>]]></message>
               </entry>"#,
        )
        .unwrap();

        assert_eq!(props.get("id"), Some(&json!("wf-1")));
        assert_eq!(props.get("name"), Some(&json!("Leave & Holiday")));
        assert_eq!(props.get("version"), Some(&json!("2")));
        assert_eq!(props.get("category"), Some(&Value::Null));
        assert_eq!(props.get("startFormKey"), Some(&Value::Null));
        assert_eq!(props.get("message"), Some(&json!("<hello>")));
    }

    #[test]
    fn test_deeper_nesting_is_ignored() {
        let props = parse("<entry><site><shortName>x</shortName></site><id>r</id></entry>").unwrap();
        assert!(!props.contains_key("shortName"));
        assert_eq!(props.get("id"), Some(&json!("r")));
    }

    #[test]
    fn test_rejects_second_root() {
        assert!(matches!(
            parse(r#"<a x="1"/><b y="2"/>"#),
            Err(ModelError::InvalidDocument(_))
        ));
        assert!(matches!(
            parse("<a><id>1</id></a><b><id>2</id></b>"),
            Err(ModelError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_xml() {
        assert!(matches!(parse("<a><b></a>"), Err(ModelError::Xml(_))));
        assert!(matches!(parse(""), Err(ModelError::InvalidDocument(_))));
        assert!(parse("<a><b>x</b>").is_err());
    }
}
