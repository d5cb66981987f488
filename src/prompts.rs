/// One stage of the explanation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStep {
    pub index: usize,
    pub label: &'static str,
    pub instruction: &'static str,
}

pub const FINAL_STEP: usize = 5;

pub static STEPS: [PromptStep; 5] = [
    PromptStep {
        index: 1,
        label: "Code structure analysis",
        instruction: "Step 1: Code structure analysis - Analyze the input code and break it down \
                      into its main constructs: functions, classes, conditionals, loops and so on.\n\
                      Structure analysis result: [the analysis will be placed here]",
    },
    PromptStep {
        index: 2,
        label: "Component roles and behavior",
        instruction: "Step 2: Detailed explanation of each component - Describe in detail the role \
                      and behavior of every element, such as function arguments and return values, \
                      class inheritance and conditional branches.\n\
                      Detailed explanation result: [the detailed explanation will be placed here]",
    },
    PromptStep {
        index: 3,
        label: "Technical analogies",
        instruction: "Step 3: Apply technical analogies - Use analogies drawn from everyday work \
                      (debugging, API calls, data flow, version control) that an experienced \
                      computer or mobile user in their thirties can relate to, referencing familiar \
                      tools like Windows, Excel and the web.\n\
                      Analogy result: [the technical analogies will be placed here]",
    },
    PromptStep {
        index: 4,
        label: "Context and flow",
        instruction: "Step 4: Organize code context and flow - Arrange the overall context and \
                      hierarchical flow of the code consistently, making clear how each part \
                      contributes to the whole system.\n\
                      Context result: [the organized context will be placed here]",
    },
    PromptStep {
        index: FINAL_STEP,
        label: "Final synthesis",
        instruction: "Step 5: Final synthesis - Combine the results of the previous four steps into \
                      a natural-language explanation that even a beginner can follow easily.\n\
                      Final natural-language explanation:\n\
                      Print the processed natural language as if it were a code file.\n\
                      Keep the paragraph structure of the whole code file, including library \
                      imports and application startup.\n\
                      Apply the indentation exactly as it appears in the code file.",
    },
];

pub fn step(index: usize) -> Option<&'static PromptStep> {
    STEPS.iter().find(|step| step.index == index)
}
