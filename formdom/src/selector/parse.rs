use super::{Combinator, ComplexSelector, Compound, SelectorError, SelectorList, Simple};

pub(crate) struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn parse_list(mut self) -> Result<SelectorList, SelectorError> {
        if self.src.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selectors = Vec::new();
        loop {
            self.skip_whitespace();
            selectors.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(',') => self.bump(),
                Some(found) => return Err(self.unexpected(found)),
            }
        }

        Ok(SelectorList { selectors })
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_whitespace = self.skip_whitespace();
            let combinator = match self.peek() {
                Some('>') => {
                    self.bump();
                    self.skip_whitespace();
                    Combinator::Child
                }
                Some(c) if had_whitespace && starts_compound(c) => Combinator::Descendant,
                _ => break,
            };
            combinators.push(combinator);
            compounds.push(self.parse_compound()?);
        }

        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        let mut universal = false;

        match self.peek() {
            Some('*') => {
                self.bump();
                universal = true;
            }
            Some(c) if is_ident_char(c) => compound.tag = Some(self.ident()?.to_ascii_lowercase()),
            _ => {}
        }

        while let Some(c) = self.peek() {
            let simple = match c {
                '#' => {
                    self.bump();
                    Simple::Id(self.ident()?)
                }
                '.' => {
                    self.bump();
                    Simple::Class(self.ident()?)
                }
                '[' => self.parse_attribute()?,
                ':' => {
                    self.bump();
                    let name = self.ident()?;
                    if name.eq_ignore_ascii_case("checked") {
                        Simple::Checked
                    } else {
                        return Err(SelectorError::UnsupportedPseudo { name });
                    }
                }
                _ => break,
            };
            compound.simples.push(simple);
        }

        if compound.tag.is_none() && compound.simples.is_empty() && !universal {
            return Err(match self.peek() {
                Some(found) => self.unexpected(found),
                None => SelectorError::UnexpectedEnd { offset: self.pos },
            });
        }

        Ok(compound)
    }

    fn parse_attribute(&mut self) -> Result<Simple, SelectorError> {
        let start = self.pos;
        self.bump(); // '['
        self.skip_whitespace();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let value = match self.peek() {
            Some(']') => None,
            Some('=') => {
                self.bump();
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => self.quoted(quote, start)?,
                    Some(_) => self.bare_value(),
                    None => return Err(SelectorError::UnclosedAttribute { offset: start }),
                };
                self.skip_whitespace();
                Some(value)
            }
            Some(found) => return Err(self.unexpected(found)),
            None => return Err(SelectorError::UnclosedAttribute { offset: start }),
        };

        match self.peek() {
            Some(']') => {
                self.bump();
                Ok(Simple::Attr { name, value })
            }
            Some(found) => Err(self.unexpected(found)),
            None => Err(SelectorError::UnclosedAttribute { offset: start }),
        }
    }

    fn quoted(&mut self, quote: char, start: usize) -> Result<String, SelectorError> {
        self.bump();
        let begin = self.pos;
        while let Some(c) = self.peek() {
            if c == quote {
                let value = self.src[begin..self.pos].to_string();
                self.bump();
                return Ok(value);
            }
            self.bump();
        }
        Err(SelectorError::UnclosedAttribute { offset: start })
    }

    fn bare_value(&mut self) -> String {
        let begin = self.pos;
        while let Some(c) = self.peek() {
            if c == ']' || c.is_whitespace() {
                break;
            }
            self.bump();
        }
        self.src[begin..self.pos].to_string()
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let begin = self.pos;
        while let Some(c) = self.peek() {
            if !is_ident_char(c) {
                break;
            }
            self.bump();
        }
        if self.pos == begin {
            return Err(match self.peek() {
                Some(found) => self.unexpected(found),
                None => SelectorError::UnexpectedEnd { offset: self.pos },
            });
        }
        Ok(self.src[begin..self.pos].to_string())
    }

    fn skip_whitespace(&mut self) -> bool {
        let begin = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos > begin
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            found,
            offset: self.pos,
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn starts_compound(c: char) -> bool {
    is_ident_char(c) || matches!(c, '*' | '#' | '.' | '[' | ':')
}
