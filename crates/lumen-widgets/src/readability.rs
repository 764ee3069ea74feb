//! Readability: the same paragraph written plainly or convolutedly, with or
//! without punctuation.

use lumen_core::*;

use crate::Widget;

pub const COMPLEX_TEXT: &str = "Utilizing convoluted and intricate language is an imperative \
necessity when it comes to the curation of webpage content, with the ultimate goal of \
amplifying comprehension and accessibility for a myriad of diverse audiences. The \
utilization of highly technical jargon and a multitude of complex words creates formidable \
barriers, impeding the potential for understanding and inducing disengagement among users. \
Conversely, by simplifying multifaceted concepts and distilling them into easily digestible \
information, webpages can be rendered more amenable and approachable, thereby facilitating \
users to effortlessly navigate, swiftly comprehend, and seamlessly extract the intended \
meaning without shouldering an excessive cognitive load. This, in turn, propels \
inclusivity, fosters engagement, and bestows user satisfaction, ultimately culminating in \
the all-encompassing triumph and reverberating impact of the website.";

pub const SIMPLE_TEXT: &str = "Using clear and simple language is essential when creating \
web content. It helps people understand and access information easily. Technical jargon and \
complex words make it hard for people to understand and can make them lose interest. On the \
other hand, when complex ideas are explained in a simple way, webpages become more \
accessible. People can navigate through the content without difficulty, understand it \
quickly, and get the meaning without feeling overwhelmed. This makes everyone feel \
included, engaged, and satisfied, leading to the success and impact of the website.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadabilityConfig {
    /// `complex` picks the convoluted paragraph.
    pub complex: bool,
    /// `no_punctuation` blanks out `.`, `,` and `-`.
    pub no_punctuation: bool,
}

impl FromControls for ReadabilityConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            complex: state.flag("complex"),
            no_punctuation: state.flag("no_punctuation"),
        }
    }
}

impl ReadabilityConfig {
    pub fn paragraph(&self) -> String {
        let text = if self.complex { COMPLEX_TEXT } else { SIMPLE_TEXT };
        if self.no_punctuation {
            text.replace(['.', ',', '-'], " ")
        } else {
            text.to_string()
        }
    }
}

pub struct ContentReadability;

impl Widget for ContentReadability {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = ReadabilityConfig::from_controls(state);
        let style = Style::new()
            .set("margin", "0")
            .set("padding", "1rem")
            .set("height", "20rem")
            .set("font-size", "0.75rem");
        Rendered::markup(format!("<p{}>{}</p>", style.attr(), cfg.paragraph()))
    }
}
