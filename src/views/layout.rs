// src/views/layout.rs

/// Largura mínima (px) a partir da qual a grade passa a ter `columns` colunas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub columns: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub base_columns: u8,
    // Em ordem crescente de largura
    pub breakpoints: &'static [Breakpoint],
}

// Grade dos cards de KPI: 1 coluna no celular, 2 no tablet, 4 no desktop
pub const KPI_GRID: GridLayout = GridLayout {
    base_columns: 1,
    breakpoints: &[
        Breakpoint { min_width: 640, columns: 2 },
        Breakpoint { min_width: 1024, columns: 4 },
    ],
};

impl GridLayout {
    pub fn columns_for(&self, viewport_width: u32) -> u8 {
        self.breakpoints
            .iter()
            .rev()
            .find(|bp| viewport_width >= bp.min_width)
            .map(|bp| bp.columns)
            .unwrap_or(self.base_columns)
    }

    /// CSS da grade, gerado da mesma tabela usada por `columns_for`.
    pub fn css(&self, selector: &str) -> String {
        let mut css = format!(
            "{selector} {{ display: grid; gap: 1rem; grid-template-columns: repeat({}, minmax(0, 1fr)); }}\n",
            self.base_columns
        );
        for bp in self.breakpoints {
            css.push_str(&format!(
                "@media (min-width: {}px) {{ {selector} {{ grid-template-columns: repeat({}, minmax(0, 1fr)); }} }}\n",
                bp.min_width,
                self.columns_for(bp.min_width)
            ));
        }
        css
    }
}
