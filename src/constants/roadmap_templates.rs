//! Pre-authored content for the offline roadmap builder.

use crate::models::domain::SkillLevel;

pub struct PhaseTemplate {
    pub name: &'static str,
    pub duration: &'static str,
    pub concepts: &'static [&'static str],
    pub goals: &'static [&'static str],
    pub description: &'static str,
}

static ADVANCED_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Algorithm Optimization & Analysis",
        duration: "2-3 weeks",
        concepts: &[
            "Time complexity mastery",
            "Space optimization",
            "Algorithm design patterns",
            "Trade-off analysis",
        ],
        goals: &[
            "Master Big O notation",
            "Optimize existing algorithms",
            "Analyze complex algorithms",
        ],
        description: "Deep dive into algorithmic efficiency and optimization techniques",
    },
    PhaseTemplate {
        name: "Expert Data Structures",
        duration: "3-4 weeks",
        concepts: &[
            "AVL trees",
            "Red-black trees",
            "B-trees",
            "Advanced graph algorithms",
            "Segment trees",
        ],
        goals: &[
            "Implement advanced trees",
            "Solve expert-level problems",
            "Build production-ready structures",
        ],
        description: "Master complex data structures used in real-world applications",
    },
    PhaseTemplate {
        name: "System Design & Applications",
        duration: "2-3 weeks",
        concepts: &[
            "Cache implementation",
            "Database indexing",
            "Distributed systems",
            "Real-world applications",
        ],
        goals: &["Design scalable systems", "Apply DS knowledge to architecture"],
        description: "Apply data structures to system design and architecture",
    },
];

static INTERMEDIATE_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Core Structures Mastery",
        duration: "2-3 weeks",
        concepts: &["Binary trees", "Hash tables", "Heaps", "Advanced recursion"],
        goals: &[
            "Implement core structures from scratch",
            "Solve medium difficulty problems",
        ],
        description: "Solidify understanding of fundamental data structures",
    },
    PhaseTemplate {
        name: "Algorithm Fundamentals",
        duration: "2-3 weeks",
        concepts: &[
            "Binary search",
            "Merge sort",
            "Quick sort",
            "DFS and BFS",
            "Dynamic programming intro",
        ],
        goals: &[
            "Master common algorithms",
            "Understand time/space complexity",
        ],
        description: "Learn essential algorithms and their applications",
    },
    PhaseTemplate {
        name: "Advanced Concepts Bridge",
        duration: "2 weeks",
        concepts: &[
            "BST operations",
            "Graph representations",
            "Priority queues",
            "Backtracking",
        ],
        goals: &["Connect concepts together", "Solve complex problems"],
        description: "Bridge to advanced topics and problem-solving",
    },
];

static BEGINNER_INTERMEDIATE_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Fundamental Structures",
        duration: "2 weeks",
        concepts: &["Arrays", "Linked lists", "Stacks", "Queues"],
        goals: &[
            "Understand basic structures",
            "Implement from scratch",
            "Solve easy problems",
        ],
        description: "Build strong foundation with core data structures",
    },
    PhaseTemplate {
        name: "Basic Algorithms",
        duration: "2 weeks",
        concepts: &[
            "Linear search",
            "Bubble sort",
            "Selection sort",
            "Basic recursion",
        ],
        goals: &[
            "Understand algorithm basics",
            "Write clean implementations",
        ],
        description: "Learn fundamental algorithms and problem-solving approaches",
    },
    PhaseTemplate {
        name: "Intermediate Preparation",
        duration: "2 weeks",
        concepts: &[
            "Two pointers",
            "Sliding window",
            "Hash map usage",
            "Simple trees",
        ],
        goals: &[
            "Apply basic structures",
            "Prepare for intermediate topics",
        ],
        description: "Bridge gap between basics and intermediate concepts",
    },
];

static BEGINNER_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Programming Fundamentals",
        duration: "1-2 weeks",
        concepts: &[
            "Variables and data types",
            "Loops and conditions",
            "Functions",
            "Basic problem solving",
        ],
        goals: &["Understand basic programming", "Write simple programs"],
        description: "Establish programming fundamentals needed for data structures",
    },
    PhaseTemplate {
        name: "Introduction to Data Structures",
        duration: "2-3 weeks",
        concepts: &[
            "What are data structures",
            "Arrays basics",
            "Lists",
            "Simple operations",
        ],
        goals: &[
            "Understand why data structures matter",
            "Work with arrays",
        ],
        description: "Gentle introduction to data structures concepts",
    },
    PhaseTemplate {
        name: "Basic Structures Practice",
        duration: "2 weeks",
        concepts: &[
            "Array manipulation",
            "String operations",
            "Introduction to stacks and queues",
        ],
        goals: &["Gain confidence with basics", "Solve beginner problems"],
        description: "Build confidence through practice with fundamental structures",
    },
];

pub fn phase_templates(level: SkillLevel) -> &'static [PhaseTemplate] {
    match level {
        SkillLevel::Advanced => &ADVANCED_PHASES,
        SkillLevel::Intermediate => &INTERMEDIATE_PHASES,
        SkillLevel::BeginnerIntermediate => &BEGINNER_INTERMEDIATE_PHASES,
        SkillLevel::Beginner => &BEGINNER_PHASES,
    }
}

pub struct WeekTemplate {
    pub daily_tasks: &'static [&'static str],
    pub practice_problems: &'static [&'static str],
}

pub const WEEK_TEMPLATES: [WeekTemplate; 4] = [
    WeekTemplate {
        daily_tasks: &[
            "Watch tutorial videos",
            "Read documentation",
            "Code basic examples",
            "Solve 2-3 easy problems",
        ],
        practice_problems: &[
            "Basic operations",
            "Simple implementations",
            "Walkthrough examples",
        ],
    },
    WeekTemplate {
        daily_tasks: &[
            "Review previous concepts",
            "Learn new structure",
            "Implement from scratch",
            "Practice problems",
        ],
        practice_problems: &[
            "Mixed difficulty",
            "Real-world scenarios",
            "Code optimization",
        ],
    },
    WeekTemplate {
        daily_tasks: &[
            "Study algorithms",
            "Analyze complexity",
            "Solve medium problems",
            "Review and debug",
        ],
        practice_problems: &[
            "Algorithm challenges",
            "Efficiency problems",
            "Edge cases",
        ],
    },
    WeekTemplate {
        daily_tasks: &[
            "Combine concepts",
            "Build mini-project",
            "Review weak areas",
            "Take practice tests",
        ],
        practice_problems: &[
            "Multi-concept problems",
            "Project tasks",
            "Interview questions",
        ],
    },
];

pub const WEEK_TWO_MILESTONE: &str = "Implement structures independently";
pub const WEEK_THREE_MILESTONE: &str = "Move to intermediate complexity";
pub const WEEK_FOUR_FOCUS: &str = "Integration and Projects";
pub const WEEK_FOUR_MILESTONE: &str = "Complete first project using learned structures";

pub const VIDEOS: &[&str] = &[
    "FreeCodeCamp - Data Structures Full Course",
    "CS50 - Data Structures lectures",
    "Abdul Bari - Algorithms",
    "MIT OpenCourseWare - Introduction to Algorithms",
    "mycodeschool - Data Structures",
];

pub const ARTICLES: &[&str] = &[
    "GeeksforGeeks Data Structures tutorials",
    "Programiz DS tutorials",
    "Visualgo - Algorithm visualizations",
    "Big-O Cheat Sheet",
    "LeetCode Explore Cards",
];

pub const PRACTICE_SITES: &[&str] = &[
    "LeetCode (start with Easy)",
    "HackerRank (Data Structures track)",
    "CodeSignal",
    "Codewars",
    "Exercism",
];

pub const BOOKS: &[&str] = &[
    "Introduction to Algorithms (CLRS)",
    "Cracking the Coding Interview",
    "Data Structures and Algorithms in Python",
];

/// (title, description, timeframe, criteria)
pub const MILESTONES: &[(&str, &str, &str, &str)] = &[
    (
        "Foundation Complete",
        "Understand and implement basic structures",
        "Week 2",
        "Can implement array, list, stack, queue from scratch",
    ),
    (
        "Algorithm Basics",
        "Grasp fundamental algorithms",
        "Week 3",
        "Can explain and code basic sorting and searching",
    ),
    (
        "Problem Solver",
        "Solve problems independently",
        "Week 4",
        "Solve 10+ easy problems without hints",
    ),
    (
        "Intermediate Ready",
        "Ready for advanced topics",
        "Month 2",
        "Comfortable with trees and graphs basics",
    ),
];

pub const PRACTICE_APPROACH: &str = "Start with understanding concepts visually, then implement from scratch, finally solve problems. Focus on one structure at a time before combining them.";

pub const EASY_PROBLEMS: &[&str] = &[
    "Array manipulations",
    "String operations",
    "Basic stack/queue usage",
    "Simple linked list operations",
];

pub const MEDIUM_PROBLEMS: &[&str] = &[
    "Tree traversals",
    "Hash map applications",
    "Two-pointer techniques",
    "Binary search variations",
];

pub const HARD_PROBLEMS: &[&str] = &[
    "Dynamic programming",
    "Complex graph problems",
    "Advanced tree operations",
    "Optimization challenges",
];

pub const PROJECTS: &[&str] = &[
    "Build a text editor with undo/redo (stack)",
    "Implement autocomplete (trie)",
    "Create a task scheduler (priority queue)",
    "Build a social network graph analyzer",
];

pub const MOTIVATIONAL_TIPS: &[&str] = &[
    "Practice coding daily, even if just 30 minutes - consistency beats intensity",
    "Visualize data structures using drawings or online tools before coding",
    "Don't just memorize - understand WHY each structure works the way it does",
    "Start with problems slightly above your comfort zone",
    "Review and redo problems you found challenging",
    "Join online communities to discuss solutions and approaches",
];

pub const DEFAULT_STRENGTHS: &[&str] = &[
    "Building foundational knowledge",
    "Taking proactive steps to learn",
];

pub const DEFAULT_IMPROVEMENTS: &[&str] = &["Continue building knowledge systematically"];

pub const DEFAULT_PRIORITY_CONCEPTS: &[&str] = &["Arrays", "Linked Lists"];

/// Recommendations after the level-specific first entry.
pub const GENERAL_RECOMMENDATIONS: &[&str] = &[
    "Implement each data structure from scratch at least once",
    "Solve problems daily to reinforce learning",
    "Use visualization tools to understand structure behavior",
    "Review time and space complexity for each operation",
];
