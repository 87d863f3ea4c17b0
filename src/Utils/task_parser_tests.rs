/////////////////////////////TESTS////////////////////////////////////////////////////
/*
comprehensive tests:
Basic parsing test
Values with spaces test
Template usage test
Comment filtering test
Empty document test
Malformed document test
File-based parsing test
*/

#[cfg(test)]
mod tests1 {

    use crate::Utils::task_parser::{
        DocumentMap, Value, filter_comments, parse_document, parse_document_as, parse_key,
        parse_key_value_pair, parse_section, parse_title, parse_value, parse_value_list,
    };
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("title1\n key1: value1").unwrap();
        assert_eq!(title, "title1");
        assert_eq!(remaining, "key1: value1");

        let (remaining, title) = parse_title("title_with_underscore key1: value1").unwrap();
        assert_eq!(title, "title_with_underscore");
        assert_eq!(remaining, "key1: value1");

        assert!(parse_title("1title").is_err());
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("key1: value1").unwrap();
        assert_eq!(key, "key1");
        assert_eq!(remaining, ": value1");

        let (remaining, key) = parse_key("key_with_underscore: value1").unwrap();
        assert_eq!(key, "key_with_underscore");
        assert_eq!(remaining, ": value1");
    }

    #[test]
    fn test_parse_value() {
        let (remaining, value) = parse_value("value1, value2").unwrap();
        assert_eq!(value, Value::String("value1".to_string()));
        assert_eq!(remaining, ", value2");

        let (remaining, value) = parse_value("123, next").unwrap();
        assert_eq!(value, Value::Integer(123));
        assert_eq!(remaining, ", next");

        let (remaining, value) = parse_value("123.45, next").unwrap();
        assert_eq!(value, Value::Float(123.45));
        assert_eq!(remaining, ", next");

        let (remaining, value) = parse_value("true, next").unwrap();
        assert_eq!(value, Value::Boolean(true));
        assert_eq!(remaining, ", next");
    }

    #[test]
    fn test_parse_value_with_spaces() {
        // an expression is one value, the line end stops it
        let (remaining, value) = parse_value("x * x + 3 * x\nnext: 1").unwrap();
        assert_eq!(value, Value::String("x * x + 3 * x".to_string()));
        assert_eq!(remaining, "\nnext: 1");
    }

    #[test]
    fn test_parse_value_list() {
        let (remaining, values) = parse_value_list("x, 3.0, y , 1").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(
            values,
            vec![
                Value::String("x".to_string()),
                Value::Float(3.0),
                Value::String("y".to_string()),
                Value::Integer(1),
            ]
        );
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) = parse_key_value_pair("diff: x\n  buffer: 16").unwrap();
        assert_eq!(key, "diff");
        assert_eq!(values, vec![Value::String("x".to_string())]);
        assert_eq!(remaining, "buffer: 16");
    }

    #[test]
    fn test_parse_section() {
        let input = "expression\n  text: x + 1\n  simplify: true\nother\n  key: 1";
        let (remaining, (title, section)) = parse_section(input).unwrap();
        assert_eq!(title, "expression");
        assert_eq!(section.len(), 2);
        assert_eq!(
            section.get("text"),
            Some(&Some(vec![Value::String("x + 1".to_string())]))
        );
        assert_eq!(
            section.get("simplify"),
            Some(&Some(vec![Value::Boolean(true)]))
        );
        assert_eq!(remaining, "other\n  key: 1");
    }

    #[test]
    fn test_parse_document_two_sections() {
        let input = "first\n  a: 1, 2\nsecond\n  b: hello\n  c: 2.5";
        let (remaining, doc) = parse_document(input).unwrap();
        assert!(remaining.trim().is_empty());
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc["first"]["a"],
            Some(vec![Value::Integer(1), Value::Integer(2)])
        );
        assert_eq!(doc["second"]["c"], Some(vec![Value::Float(2.5)]));
    }

    #[test]
    fn test_filter_comments() {
        let input = "// header\nexpression\n# note\n  text: x\n% other\n\n  diff: x";
        assert_eq!(filter_comments(input), "expression\n  text: x\n  diff: x");
    }

    #[test]
    fn test_parse_document_as_with_template() {
        let input = "expression\n  text: x * y\n";
        let mut section = HashMap::new();
        section.insert("text".to_string(), None);
        section.insert("diff".to_string(), None);
        let mut template: DocumentMap = HashMap::new();
        template.insert("expression".to_string(), section);

        let doc = parse_document_as(input, Some(&template)).unwrap();
        let expression = &doc["expression"];
        assert_eq!(
            expression["text"],
            Some(vec![Value::String("x * y".to_string())])
        );
        assert_eq!(expression["diff"], None);
    }

    #[test]
    fn test_parse_document_as_empty_and_malformed() {
        assert!(parse_document_as("", None).is_err());
        assert!(parse_document_as("// only a comment", None).is_err());
        assert!(parse_document_as("title\n  no colon here", None).is_err());
    }

    #[test]
    fn test_parse_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "expression").unwrap();
        writeln!(file, "  // the function").unwrap();
        writeln!(file, "  text: x * x + 3 * x").unwrap();
        writeln!(file, "  eval: x, 2").unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        let doc = parse_document_as(&content, None).unwrap();
        let expression = &doc["expression"];
        assert_eq!(
            expression["text"],
            Some(vec![Value::String("x * x + 3 * x".to_string())])
        );
        assert_eq!(
            expression["eval"],
            Some(vec![Value::String("x".to_string()), Value::Integer(2)])
        );
    }
}
