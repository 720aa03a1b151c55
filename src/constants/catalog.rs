use crate::models::domain::DifficultyTier;

pub const VERY_BASIC_TOPICS: &[&str] = &[
    "arrays and basic indexing",
    "what variables store",
    "basic list operations",
    "simple iteration/loops",
    "counting elements",
];

pub const BASIC_TOPICS: &[&str] = &[
    "arrays and array operations",
    "linked lists basics",
    "stack LIFO principle",
    "queue FIFO principle",
    "basic recursion",
    "linear search",
    "bubble sort basics",
];

pub const INTERMEDIATE_TOPICS: &[&str] = &[
    "binary search algorithm",
    "merge sort or quick sort",
    "binary trees structure",
    "hash tables and hashing",
    "doubly linked lists",
    "circular queues",
    "depth-first search (DFS)",
    "breadth-first search (BFS)",
    "heaps (min/max heap)",
];

pub const ADVANCED_TOPICS: &[&str] = &[
    "AVL trees and rotations",
    "red-black trees",
    "B-trees and B+ trees",
    "graph algorithms (Dijkstra, Bellman-Ford)",
    "dynamic programming with data structures",
    "trie data structure",
    "segment trees",
    "disjoint set union (DSU)",
    "skip lists",
    "suffix arrays or suffix trees",
];

/// Emergency questions are indexed by `min(question_number - 1, 4)`.
pub const EMERGENCY_QUESTION_COUNT: usize = 5;

static VERY_BASIC_EMERGENCY: [&str; EMERGENCY_QUESTION_COUNT] = [
    "How well do you understand arrays?",
    "How familiar are you with linked lists?",
    "How well do you know stacks?",
    "How comfortable are you with queues?",
    "How well do you understand loops?",
];

static BASIC_EMERGENCY: [&str; EMERGENCY_QUESTION_COUNT] = [
    "How well do you understand arrays and array operations?",
    "How familiar are you with linked lists?",
    "How well do you know stacks and the LIFO principle?",
    "How comfortable are you with queues and the FIFO principle?",
    "How well do you understand basic recursion?",
];

static INTERMEDIATE_EMERGENCY: [&str; EMERGENCY_QUESTION_COUNT] = [
    "How well do you know binary search trees?",
    "How familiar are you with hash tables?",
    "How well do you understand depth-first search?",
    "How comfortable are you with heaps?",
    "How well do you know merge sort?",
];

static ADVANCED_EMERGENCY: [&str; EMERGENCY_QUESTION_COUNT] = [
    "How well do you know self-balancing binary search trees?",
    "How familiar are you with graph traversal algorithms like Dijkstra's?",
    "How well do you understand trie data structures?",
    "How comfortable are you with dynamic programming optimizations?",
    "How well do you know segment trees for range queries?",
];

pub fn emergency_questions(tier: DifficultyTier) -> &'static [&'static str; EMERGENCY_QUESTION_COUNT] {
    match tier {
        DifficultyTier::VeryBasic => &VERY_BASIC_EMERGENCY,
        DifficultyTier::Basic => &BASIC_EMERGENCY,
        DifficultyTier::Intermediate => &INTERMEDIATE_EMERGENCY,
        DifficultyTier::Advanced => &ADVANCED_EMERGENCY,
    }
}

/// Keywords accepted by the chat guardrail when the classifier is unreachable.
pub const SUBJECT_KEYWORDS: &[&str] = &[
    "arrays",
    "array",
    "linked list",
    "stack",
    "queue",
    "tree",
    "graph",
    "hash table",
    "hash map",
    "heap",
    "sorting",
    "sort",
    "searching",
    "binary search",
    "big o",
    "time complexity",
    "space complexity",
    "binary search tree",
    "avl tree",
    "red-black tree",
    "b-tree",
    "depth-first search",
    "breadth-first search",
    "dijkstra",
    "dynamic programming",
    "recursion",
    "data structure",
];
