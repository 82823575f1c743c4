use crate::console::recall::RecallBuffer;

pub const EXIT_COMMAND: &str = "exit";
pub const CLEAR_COMMAND: &str = "clear";

#[derive(Clone, Copy)]
pub enum CommandAction {
    Static(&'static [&'static str]),
    /// Output derived from what the user has run so far.
    Computed(fn(&RecallBuffer) -> Vec<String>),
}

impl CommandAction {
    pub fn output(&self, recall: &RecallBuffer) -> Vec<String> {
        match self {
            CommandAction::Static(lines) => lines.iter().map(|l| l.to_string()).collect(),
            CommandAction::Computed(f) => f(recall),
        }
    }
}

pub const WELCOME: &[&str] = &[
    "╔══════════════════════════════════════════╗",
    "║   Welcome to Manish's Terminal v1.0      ║",
    "║   Interactive Portfolio Experience       ║",
    "╚══════════════════════════════════════════╝",
    "",
    "Type \"help\" to see available commands.",
    "Type \"exit\" to close terminal.",
    "",
];

const HELP: &[&str] = &[
    "Available commands:",
    "",
    "  whoami          - Display information about me",
    "  ls              - List available files",
    "  cat <file>      - Read file contents",
    "  skills          - Show my technical skills",
    "  projects        - List my projects",
    "  contact         - Get contact information",
    "  achievements    - View achievements and stats",
    "  clear           - Clear terminal",
    "  exit            - Close terminal",
    "",
];

const WHOAMI: &[&str] = &[
    "Manish Singh Rana",
    "",
    "Full Stack Developer | Software Engineer",
    "Location: [Your Location]",
    "Status: Available for freelance work",
    "",
    "Passionate about building modern web applications",
    "and creating exceptional user experiences.",
    "",
];

const LS: &[&str] = &[
    "about.txt",
    "experience.json",
    "skills.md",
    "projects.yaml",
    "contact.vcf",
    "secret.txt",
    "",
];

const CAT_ABOUT: &[&str] = &[
    "ABOUT ME",
    "========",
    "",
    "Hi! I'm Manish, a Full Stack Developer who loves turning",
    "ideas into reality through clean, efficient code.",
    "",
    "I specialize in:",
    "- Modern web technologies (React, Node.js, TypeScript)",
    "- Building scalable applications",
    "- Creating pixel-perfect UIs",
    "- Problem-solving and optimization",
    "",
    "When I'm not coding, you can find me exploring new",
    "technologies, contributing to open source, or enjoying",
    "a good cup of coffee.",
    "",
];

const CAT_EXPERIENCE: &[&str] = &[
    "{",
    "  \"total_years\": \"3+\",",
    "  \"companies_worked\": 5,",
    "  \"projects_completed\": 25,",
    "  \"technologies\": [",
    "    \"React\", \"Node.js\", \"TypeScript\",",
    "    \"Next.js\", \"MongoDB\", \"PostgreSQL\",",
    "    \"AWS\", \"Docker\", \"Git\"",
    "  ],",
    "  \"currently_learning\": [\"Three.js\", \"WebGL\", \"Rust\"]",
    "}",
    "",
];

const CAT_SKILLS: &[&str] = &[
    "# Technical Skills",
    "",
    "## Frontend",
    "- React, Next.js, TypeScript",
    "- Tailwind CSS, Framer Motion",
    "- HTML5, CSS3, JavaScript ES6+",
    "",
    "## Backend",
    "- Node.js, Express.js",
    "- RESTful APIs, GraphQL",
    "- MongoDB, PostgreSQL",
    "",
    "## DevOps & Tools",
    "- Git, GitHub Actions",
    "- Docker, AWS",
    "- VS Code, Figma",
    "",
];

const CAT_PROJECTS: &[&str] = &[
    "projects:",
    "  - name: E-Commerce Platform",
    "    tech: [React, Node.js, MongoDB]",
    "    status: completed",
    "",
    "  - name: Social Media Dashboard",
    "    tech: [Next.js, TypeScript, PostgreSQL]",
    "    status: completed",
    "",
    "  - name: Real-time Chat App",
    "    tech: [React, Socket.io, Express]",
    "    status: completed",
    "",
    "  - name: Portfolio Website",
    "    tech: [React, Tailwind, Framer Motion]",
    "    status: active",
    "",
];

const CAT_CONTACT: &[&str] = &[
    "BEGIN:VCARD",
    "VERSION:3.0",
    "FN:Manish Singh Rana",
    "EMAIL:your.email@example.com",
    "URL:https://your-portfolio.com",
    "GITHUB:https://github.com/yourusername",
    "LINKEDIN:https://linkedin.com/in/yourusername",
    "END:VCARD",
    "",
];

const CAT_SECRET: &[&str] = &[
    "🎉 Congratulations! You found the secret file!",
    "",
    "   ╔═══════════════════════════════╗",
    "   ║    ACHIEVEMENT UNLOCKED!      ║",
    "   ║     \"Terminal Master\"         ║",
    "   ╚═══════════════════════════════╝",
    "",
    "You have successfully demonstrated your",
    "curiosity and command-line skills!",
    "",
    "Pro tip: Try \"achievements\" to see more!",
    "",
];

const SKILLS: &[&str] = &[
    "⚡ SKILL MATRIX",
    "═══════════════",
    "",
    "React         ████████████████░░ 90%",
    "TypeScript    ███████████████░░░ 85%",
    "Node.js       ██████████████░░░░ 80%",
    "Next.js       ██████████████░░░░ 80%",
    "Tailwind CSS  ████████████████░░ 90%",
    "MongoDB       █████████████░░░░░ 75%",
    "Docker        ████████████░░░░░░ 70%",
    "AWS           ███████████░░░░░░░ 65%",
    "",
];

const PROJECTS: &[&str] = &[
    "📂 FEATURED PROJECTS",
    "═══════════════════",
    "",
    "1. E-Commerce Platform",
    "   └─ Full-stack online store with payment integration",
    "   └─ Tech: React, Node.js, Stripe, MongoDB",
    "",
    "2. Social Media Dashboard",
    "   └─ Analytics platform for social media management",
    "   └─ Tech: Next.js, TypeScript, PostgreSQL",
    "",
    "3. Real-time Chat Application",
    "   └─ WebSocket-based chat with rooms and private messages",
    "   └─ Tech: React, Socket.io, Express",
    "",
    "Type \"cat projects.yaml\" for more details",
    "",
];

const CONTACT: &[&str] = &[
    "📧 GET IN TOUCH",
    "═══════════════",
    "",
    "Email:    your.email@example.com",
    "GitHub:   github.com/yourusername",
    "LinkedIn: linkedin.com/in/yourusername",
    "Website:  your-portfolio.com",
    "",
    "Available for:",
    "  ✓ Freelance projects",
    "  ✓ Full-time opportunities",
    "  ✓ Collaboration",
    "  ✓ Consulting",
    "",
];

fn achievements(recall: &RecallBuffer) -> Vec<String> {
    let mut lines: Vec<String> = [
        "🏆 ACHIEVEMENTS",
        "═══════════════",
        "",
        "✓ Terminal Master   - Found the secret file",
        "✓ Code Warrior      - Completed 25+ projects",
        "✓ Stack Expert      - Mastered full-stack development",
        "✓ Team Player       - Collaborated on 10+ team projects",
        "✓ Open Source       - Contributed to 5+ repositories",
        "✓ Fast Learner      - Learned 3 new technologies this year",
        "",
        "📊 STATS",
        "───────",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect();
    lines.push(format!("Total Commands Executed: {}", recall.len()));
    lines.push(format!("Files Explored: {}", recall.count_prefixed("cat")));
    lines.push("Sessions Completed: 1".to_string());
    lines.push(String::new());
    lines
}

/// Every command the interpreter resolves by exact, lower-cased key.
pub const COMMANDS: &[(&str, CommandAction)] = &[
    ("help", CommandAction::Static(HELP)),
    ("whoami", CommandAction::Static(WHOAMI)),
    ("ls", CommandAction::Static(LS)),
    ("cat about.txt", CommandAction::Static(CAT_ABOUT)),
    ("cat experience.json", CommandAction::Static(CAT_EXPERIENCE)),
    ("cat skills.md", CommandAction::Static(CAT_SKILLS)),
    ("cat projects.yaml", CommandAction::Static(CAT_PROJECTS)),
    ("cat contact.vcf", CommandAction::Static(CAT_CONTACT)),
    ("cat secret.txt", CommandAction::Static(CAT_SECRET)),
    ("skills", CommandAction::Static(SKILLS)),
    ("projects", CommandAction::Static(PROJECTS)),
    ("contact", CommandAction::Static(CONTACT)),
    ("achievements", CommandAction::Computed(achievements)),
];

pub fn lookup(key: &str) -> Option<&'static CommandAction> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, action)| action)
}

pub fn not_found(key: &str) -> Vec<String> {
    vec![
        format!("Command not found: {key}"),
        "Type \"help\" for available commands.".to_string(),
        String::new(),
    ]
}

/// Candidates for Tab completion, including the built-in keywords.
pub fn command_names() -> Vec<String> {
    COMMANDS
        .iter()
        .map(|(name, _)| name.to_string())
        .chain([CLEAR_COMMAND.to_string(), EXIT_COMMAND.to_string()])
        .collect()
}
