//! A task document describes one run of the symbolic pipeline:
//!
//! ```text
//! expression
//!   text: x * x + 3 * x
//!   diff: x
//!   substitute: x, 2.0
//!   eval: x, 3.0, y, 1.0
//!   simplify: true
//!   buffer: 16
//!   loglevel: info
//! ```
//! Only `text` is mandatory.
use crate::Utils::task_parser::{DocumentMap, SectionMap, Value, parse_document_as};
use crate::symbolic::parse_expr::parse_expression_func;
use crate::symbolic::symbolic_error::SymbolicError;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const TASK_SECTION: &str = "expression";
const TASK_KEYS: [&str; 7] = [
    "text",
    "diff",
    "substitute",
    "eval",
    "simplify",
    "buffer",
    "loglevel",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicTask {
    pub text: String,
    pub diff: Option<String>,
    pub substitute: Option<(String, f64)>,
    pub eval: HashMap<String, f64>,
    pub simplify: bool,
    pub buffer: Option<usize>,
    pub loglevel: Option<String>,
}

/// results of one task; absent entries were not requested
#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub parsed: String,
    pub simplified: Option<String>,
    pub derivative: Option<String>,
    pub substituted: Option<String>,
    pub value: f64,
    pub bounded: Option<String>,
}

fn section_values<'a>(section: &'a SectionMap, key: &str) -> Option<&'a [Value]> {
    section.get(key).and_then(|values| values.as_deref())
}

fn single_value<'a>(values: &'a [Value], key: &str) -> Result<&'a Value, SymbolicError> {
    match values {
        [value] => Ok(value),
        _ => Err(SymbolicError::Task(format!(
            "key '{}' takes exactly one value, got {}",
            key,
            values.len()
        ))),
    }
}

fn float_value(value: &Value, key: &str) -> Result<f64, SymbolicError> {
    value
        .as_float()
        .ok_or_else(|| SymbolicError::Task(format!("key '{}': '{}' is not a number", key, value)))
}

/// pairs `name, number, name, number, ...`
fn name_value_pairs(values: &[Value], key: &str) -> Result<Vec<(String, f64)>, SymbolicError> {
    if values.len() % 2 != 0 {
        return Err(SymbolicError::Task(format!(
            "key '{}' needs name, value pairs",
            key
        )));
    }
    values
        .chunks(2)
        .map(|pair| -> Result<(String, f64), SymbolicError> {
            Ok((pair[0].to_string_value(), float_value(&pair[1], key)?))
        })
        .collect()
}

impl SymbolicTask {
    pub fn new(text: &str) -> Self {
        SymbolicTask {
            text: text.to_string(),
            diff: None,
            substitute: None,
            eval: HashMap::new(),
            simplify: false,
            buffer: None,
            loglevel: None,
        }
    }

    /// builds the task from a parsed document, the `expression` section is required
    pub fn from_document(document: &DocumentMap) -> Result<Self, SymbolicError> {
        let section = document.get(TASK_SECTION).ok_or_else(|| {
            SymbolicError::Task(format!("no '{}' section in the document", TASK_SECTION))
        })?;
        if let Some(unknown) = section.keys().find(|key| !TASK_KEYS.contains(&key.as_str())) {
            return Err(SymbolicError::Task(format!("unknown key '{}'", unknown)));
        }
        let get = |key: &str| section_values(section, key);

        let text = match get("text") {
            Some(values) => single_value(values, "text")?.to_string_value(),
            None => return Err(SymbolicError::Task("key 'text' is mandatory".to_string())),
        };
        let mut task = SymbolicTask::new(&text);

        if let Some(values) = get("diff") {
            task.diff = Some(single_value(values, "diff")?.to_string_value());
        }
        if let Some(values) = get("substitute") {
            let mut pairs = name_value_pairs(values, "substitute")?;
            if pairs.len() != 1 {
                return Err(SymbolicError::Task(
                    "key 'substitute' takes one name and one value".to_string(),
                ));
            }
            task.substitute = pairs.pop();
        }
        if let Some(values) = get("eval") {
            task.eval = name_value_pairs(values, "eval")?.into_iter().collect();
        }
        if let Some(values) = get("simplify") {
            let value = single_value(values, "simplify")?;
            task.simplify = value.as_boolean().ok_or_else(|| {
                SymbolicError::Task(format!("key 'simplify': '{}' is not a boolean", value))
            })?;
        }
        if let Some(values) = get("buffer") {
            let value = single_value(values, "buffer")?;
            let capacity = value
                .as_integer()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    SymbolicError::Task(format!("key 'buffer': '{}' is not a size", value))
                })?;
            task.buffer = Some(capacity);
        }
        if let Some(values) = get("loglevel") {
            task.loglevel = Some(single_value(values, "loglevel")?.to_string_value());
        }
        Ok(task)
    }

    pub fn from_str(input: &str) -> Result<Self, SymbolicError> {
        let document = parse_document_as(input, None).map_err(SymbolicError::Task)?;
        Self::from_document(&document)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SymbolicError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// parse, then optionally simplify, differentiate, substitute; evaluate the final tree
    pub fn run(&self) -> Result<TaskReport, SymbolicError> {
        let parsed = parse_expression_func(&self.text)?;
        info!("parsed '{}' into {} nodes", self.text, parsed.node_count());

        let mut current = if self.simplify {
            parsed.simplify()
        } else {
            parsed.clone()
        };
        let simplified = self.simplify.then(|| current.to_string());

        let derivative = match &self.diff {
            Some(var) => {
                let mut derivative = current.try_diff(var)?;
                if self.simplify {
                    derivative.simplify_in_place();
                }
                info!("d/d{} = {}", var, derivative);
                Some(derivative)
            }
            None => None,
        };
        if let Some(derivative) = &derivative {
            current = derivative.clone();
        }

        let substituted = match &self.substitute {
            Some((var, value)) => {
                current = current.set_variable(var, *value);
                if self.simplify {
                    current.simplify_in_place();
                }
                Some(current.to_string())
            }
            None => None,
        };

        let value = current.eval_from_map(&self.eval);
        info!("value of '{}' = {}", current, value);
        let bounded = self
            .buffer
            .map(|capacity| current.to_string_bounded(capacity));

        Ok(TaskReport {
            parsed: parsed.to_string(),
            simplified,
            derivative: derivative.map(|d| d.to_string()),
            substituted,
            value,
            bounded,
        })
    }
}

impl fmt::Display for TaskReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "parsed:      {}", self.parsed)?;
        if let Some(simplified) = &self.simplified {
            writeln!(f, "simplified:  {}", simplified)?;
        }
        if let Some(derivative) = &self.derivative {
            writeln!(f, "derivative:  {}", derivative)?;
        }
        if let Some(substituted) = &self.substituted {
            writeln!(f, "substituted: {}", substituted)?;
        }
        writeln!(f, "value:       {}", self.value)?;
        if let Some(bounded) = &self.bounded {
            writeln!(f, "bounded:     {}", bounded)?;
        }
        Ok(())
    }
}
