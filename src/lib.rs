pub mod configuration;

pub mod function {
    pub mod function;

    pub mod basic {
        pub mod exp;
        pub mod logarithm;
        pub mod trigonometric;
    }

    pub mod meta {
        pub mod combinator;
    }
}

pub mod integration;

pub mod opts;

pub mod tabulated {
    pub mod functionpoint;
    pub mod tabulatedfunction;
    pub mod arraytabulatedfunction;
    pub mod linkedlisttabulatedfunction;
    pub mod backend;
}

pub mod tabulation {
    pub mod tabulation;
    pub mod binaryformat;
    pub mod textformat;
}

pub mod task {
    pub mod task;
    pub mod handoff;
}
