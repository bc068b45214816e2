use clap::ValueEnum;
use glosskit_core::MergeOption;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum MergeOptionFlag {
    Main,
    Secondary,
    MainSecondary,
    SecondaryMain,
}

impl MergeOptionFlag {
    pub(crate) const fn as_domain(self) -> MergeOption {
        match self {
            MergeOptionFlag::Main => MergeOption::Main,
            MergeOptionFlag::Secondary => MergeOption::Secondary,
            MergeOptionFlag::MainSecondary => MergeOption::MainSecondary,
            MergeOptionFlag::SecondaryMain => MergeOption::SecondaryMain,
        }
    }
}
