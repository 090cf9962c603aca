use super::*;

#[test]
fn from_filename_maps_all_supported_extensions() {
    let cases = [
        ("a.js", Language::JavaScript),
        ("a.jsx", Language::JavaScript),
        ("a.mjs", Language::JavaScript),
        ("a.cjs", Language::JavaScript),
        ("a.ts", Language::TypeScript),
        ("a.tsx", Language::TypeScript),
        ("a.html", Language::Html),
        ("a.htm", Language::Html),
        ("a.xhtml", Language::Html),
        ("a.css", Language::Css),
        ("a.scss", Language::Scss),
        ("a.less", Language::Less),
        ("a.json", Language::Json),
        ("a.md", Language::Markdown),
        ("a.markdown", Language::Markdown),
        ("a.py", Language::Python),
        ("a.pyc", Language::Python),
        ("a.pyd", Language::Python),
        ("a.pyo", Language::Python),
        ("a.java", Language::Java),
        ("a.cs", Language::CSharp),
        ("a.php", Language::Php),
        ("a.rb", Language::Ruby),
        ("a.go", Language::Go),
        ("a.sql", Language::Sql),
        ("a.xml", Language::Xml),
        ("a.yml", Language::Yaml),
        ("a.yaml", Language::Yaml),
        ("a.sh", Language::Shell),
        ("a.bash", Language::Shell),
        ("a.c", Language::C),
        ("a.cpp", Language::Cpp),
        ("a.h", Language::Cpp),
        ("a.hpp", Language::Cpp),
    ];

    for (name, expected) in cases {
        assert_eq!(Language::from_filename(name), expected, "{name}");
    }
}

#[test]
fn unknown_or_missing_extension_is_plaintext() {
    assert_eq!(Language::from_filename("a.unknownext"), Language::PlainText);
    assert_eq!(Language::from_filename("Makefile"), Language::PlainText);
    assert_eq!(Language::from_filename("trailing."), Language::PlainText);
    assert_eq!(Language::PlainText.as_str(), "plaintext");
}

#[test]
fn extension_is_case_insensitive_and_uses_last_dot() {
    assert_eq!(Language::from_filename("App.TSX"), Language::TypeScript);
    assert_eq!(Language::from_filename("archive.tar.sh"), Language::Shell);
    assert_eq!(file_extension("README.MD"), "md");
    assert_eq!(file_extension("bash"), "bash");
}

#[test]
fn names_without_dot_match_as_whole_word() {
    // 没有扩展名时整个名字参与匹配
    assert_eq!(Language::from_filename("go"), Language::Go);
}

#[test]
fn status_label_is_upper_case() {
    assert_eq!(Language::TypeScript.status_label(), "TYPESCRIPT");
    assert_eq!(Language::CSharp.to_string(), "csharp");
}

#[test]
fn file_icons_follow_extension_groups() {
    assert_eq!(FileIcon::from_filename("main.tsx"), FileIcon::Code);
    assert_eq!(FileIcon::from_filename("package.json"), FileIcon::Json);
    assert_eq!(FileIcon::from_filename("notes.txt"), FileIcon::Text);
    assert_eq!(FileIcon::from_filename("logo.PNG"), FileIcon::Image);
    assert_eq!(FileIcon::from_filename("styles.css"), FileIcon::Generic);
}
