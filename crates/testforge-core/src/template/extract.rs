//! Component-name extraction from pasted source.
//!
//! This is a text-pattern heuristic, not a parser. Patterns are tried in
//! order and the first one that matches anywhere in the source wins.

use regex::Regex;

/// Identifier used when no pattern matches.
pub const DEFAULT_COMPONENT_NAME: &str = "Component";

/// Ordered component patterns. Capture group 1 is the identifier.
pub const COMPONENT_PATTERNS: &[&str] = &[
    // export [default] [async] function Name
    r"\bexport\s+(?:default\s+)?(?:async\s+)?function(?:\s*\*\s*|\s+)([A-Za-z_$][\w$]*)",
    // export [default] [abstract] class Name
    r"\bexport\s+(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)",
    // export [default] const Name[: Type] = [async] (...) => / arg =>
    r"\bexport\s+(?:default\s+)?const\s+([A-Za-z_$][\w$]*)\s*(?::[^=]+)?=\s*(?:async\s*)?(?:\(|[A-Za-z_$][\w$]*\s*=>)",
];

/// Extracts the component identifier from `source`.
///
/// Never fails: falls back to [`DEFAULT_COMPONENT_NAME`].
pub fn extract_component_name(source: &str) -> String {
    for pattern in COMPONENT_PATTERNS {
        let re = match Regex::new(pattern) {
            Ok(r) => r,
            Err(_) => continue,
        };

        if let Some(name) = re
            .captures(source)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
        {
            return name.to_string();
        }
    }

    DEFAULT_COMPONENT_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_function() {
        let src = "import React from 'react'\nexport function Button() { return <button/> }";
        assert_eq!(extract_component_name(src), "Button");
    }

    #[test]
    fn test_default_function() {
        assert_eq!(
            extract_component_name("export default function Header({ title }) {}"),
            "Header"
        );
    }

    #[test]
    fn test_exported_class() {
        let src = "export class Modal extends React.Component { render() {} }";
        assert_eq!(extract_component_name(src), "Modal");
    }

    #[test]
    fn test_arrow_const() {
        assert_eq!(
            extract_component_name("export const Card = ({ children }) => <div>{children}</div>"),
            "Card"
        );
        assert_eq!(
            extract_component_name("export const Avatar: React.FC<Props> = (props) => null"),
            "Avatar"
        );
        assert_eq!(
            extract_component_name("export const Badge = async () => null"),
            "Badge"
        );
    }

    #[test]
    fn test_function_wins_over_class() {
        let src = "export class Store {}\nexport function App() {}";
        assert_eq!(extract_component_name(src), "App");
    }

    #[test]
    fn test_first_function_wins() {
        let src = "export function First() {}\nexport function Second() {}";
        assert_eq!(extract_component_name(src), "First");
    }

    #[test]
    fn test_generator_function() {
        assert_eq!(extract_component_name("export function* Steps() {}"), "Steps");
        assert_eq!(extract_component_name("export functional"), DEFAULT_COMPONENT_NAME);
    }

    #[test]
    fn test_non_arrow_const_ignored() {
        assert_eq!(extract_component_name("export const LIMIT = 10"), DEFAULT_COMPONENT_NAME);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(extract_component_name(""), DEFAULT_COMPONENT_NAME);
        assert_eq!(extract_component_name("function local() {}"), DEFAULT_COMPONENT_NAME);
        assert_eq!(extract_component_name("export {{{ broken"), DEFAULT_COMPONENT_NAME);
    }
}
