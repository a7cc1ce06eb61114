//! Contains all data types to represent a group of typed constants.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores all necessary information about a tuple struct and the constants declared with its type.
pub struct Enumeration {
    pub vis: syn::Visibility,
    pub ident: syn::Ident,
    /// The integer primitive wrapped by the tuple struct.
    pub repr: syn::Ident,
    /// All constants of the type, in declaration order.
    pub constants: Vec<Constant>
}

/// A single constant of an enumeration.
pub struct Constant {
    pub ident: syn::Ident,
    /// `true` if the constant is declared in an `impl` block of the type.
    pub associated: bool,
    pub value: i128,
    /// The name under which the constant is listed, the identifier unless renamed.
    pub name: String
}

impl Enumeration {
    /// Returns the first constant of every distinct value, in declaration order.
    pub fn unique(&self) -> Vec<&Constant> {
        let mut seen = std::collections::HashSet::with_capacity(self.constants.len());
        self.constants.iter().filter(|c| seen.insert(c.value)).collect()
    }

    /// Renames all constants, failing if two of them would end up with the same name.
    pub fn rename(&mut self, case: crate::Case) -> syn::Result<()> {
        let mut names = std::collections::HashMap::<String, &syn::Ident>::new();

        for constant in &mut self.constants {
            constant.name = case.apply(&constant.ident.to_string());
        }

        for constant in &self.constants {
            if let Some(previous) = names.insert(constant.name.clone(), &constant.ident) {
                return Err(syn::Error::new(constant.ident.span(), format!(
                    "name `{}` is already used by `{}`", constant.name, previous
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn unique() {
        let enumeration = parse_enumeration!(
            "struct A(u8); const B: A = A(1); const C: A = A(2); const D: A = B; const E: A = A(2);",
            "A"
        ).unwrap();

        let unique: Vec<_> = enumeration.unique().iter().map(|c| c.ident.to_string()).collect();
        assert_eq!(unique, ["B", "C"]);
    }

    #[test]
    fn rename() {
        let mut enumeration = parse_enumeration!(
            "struct A(u8); const LIGHT_ON: A = A(1); const LIGHT_OFF: A = A(0);", "A"
        ).unwrap();

        enumeration.rename(crate::Case::Pascal).unwrap();
        let names: Vec<_> = enumeration.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["LightOn", "LightOff"]);

        enumeration.rename(crate::Case::Kebab).unwrap();
        let names: Vec<_> = enumeration.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["light-on", "light-off"]);
    }

    #[test]
    fn rename_collision() {
        let mut enumeration = parse_enumeration!(
            "struct A(u8); const ON: A = A(1); const On: A = A(0);", "A"
        ).unwrap();

        let error = enumeration.rename(crate::Case::Lower).map(|_| ()).unwrap_err();
        assert_eq!(error.to_string(), "name `on` is already used by `ON`");
        compare_span!(error.span(), (1, 40), (1, 42));
    }
}
