#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeSnippet {
    pub language: &'static str,
    pub title: &'static str,
    pub code: &'static str,
}

impl CodeSnippet {
    pub fn char_count(&self) -> usize {
        self.code.chars().count()
    }
}

pub const SNIPPETS: &[CodeSnippet] = &[
    CodeSnippet {
        language: "JavaScript",
        title: "Array Filter",
        code: "const numbers = [1, 2, 3, 4, 5];\nconst evens = numbers.filter(n => n % 2 === 0);",
    },
    CodeSnippet {
        language: "JavaScript",
        title: "Async Function",
        code: "async function fetchData(url) {\n  const response = await fetch(url);\n  return response.json();\n}",
    },
    CodeSnippet {
        language: "TypeScript",
        title: "Interface",
        code: "interface User {\n  id: number;\n  name: string;\n  email: string;\n}",
    },
    CodeSnippet {
        language: "React",
        title: "Component",
        code: "const Button = ({ onClick, children }) => (\n  <button onClick={onClick}>{children}</button>\n);",
    },
    CodeSnippet {
        language: "Python",
        title: "List Comprehension",
        code: "squares = [x**2 for x in range(10)]",
    },
    CodeSnippet {
        language: "Python",
        title: "Function",
        code: "def greet(name: str) -> str:\n    return f\"Hello, {name}!\"",
    },
];
