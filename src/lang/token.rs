/// ## Command keywords
///
/// Every executable line starts with one of these words, after any label.
/// Keywords match whole tokens, so `if` never shadows `ifu`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // *** Arithmetic
    Int,
    Uint,
    Intb,
    Float,

    // *** Logic
    And,
    Or,
    Xor,
    Not,
    Lsl,
    Lsr,
    Rand,

    // *** String
    Let,
    Mov,
    Append,
    Apd,
    Vlen,
    Hlen,

    // *** Control transfer
    Jmp,
    Call,
    Ret,
    Push,
    Pop,
    End,

    // *** Conditionals
    If,
    Ifu,
    Ifb,
    Iff,
    Ifs,
    Else,
    Endif,

    // *** Loops
    While,
    Whileu,
    Whileb,
    Whilef,
    Whiles,
    Endwhile,
    For,
    Next,
    Break,

    // *** I/O and time
    Print,
    Sleep,
    Input,
    Read,
    Stime,
    Gtime,
    Csr,

    // *** Hardware sequencing
    Arr,
    Free,
    Pict,
    Gpio,
    Clrgpio,
    Ingpio,
    Snd,
    Intsnd,
    Clrsnd,
    Beat,
    Save,
    Load,

    // *** Meta
    Label,
    Clear,
    Ptr,
}

impl Command {
    pub const ALL: [Command; 61] = {
        use Command::*;
        [
            Int, Uint, Intb, Float, And, Or, Xor, Not, Lsl, Lsr, Rand, Let, Mov, Append, Apd,
            Vlen, Hlen, Jmp, Call, Ret, Push, Pop, End, If, Ifu, Ifb, Iff, Ifs, Else, Endif,
            While, Whileu, Whileb, Whilef, Whiles, Endwhile, For, Next, Break, Print, Sleep,
            Input, Read, Stime, Gtime, Csr, Arr, Free, Pict, Gpio, Clrgpio, Ingpio, Snd, Intsnd,
            Clrsnd, Beat, Save, Load, Label, Clear, Ptr,
        ]
    };

    pub fn keyword(self) -> &'static str {
        use Command::*;
        match self {
            Int => "int",
            Uint => "uint",
            Intb => "intb",
            Float => "float",
            And => "and",
            Or => "or",
            Xor => "xor",
            Not => "not",
            Lsl => "lsl",
            Lsr => "lsr",
            Rand => "rand",
            Let => "let",
            Mov => "mov",
            Append => "append",
            Apd => "apd",
            Vlen => "vlen",
            Hlen => "hlen",
            Jmp => "jmp",
            Call => "call",
            Ret => "ret",
            Push => "push",
            Pop => "pop",
            End => "end",
            If => "if",
            Ifu => "ifu",
            Ifb => "ifb",
            Iff => "iff",
            Ifs => "ifs",
            Else => "else",
            Endif => "endif",
            While => "while",
            Whileu => "whileu",
            Whileb => "whileb",
            Whilef => "whilef",
            Whiles => "whiles",
            Endwhile => "endwhile",
            For => "for",
            Next => "next",
            Break => "break",
            Print => "print",
            Sleep => "sleep",
            Input => "input",
            Read => "read",
            Stime => "stime",
            Gtime => "gtime",
            Csr => "csr",
            Arr => "arr",
            Free => "free",
            Pict => "pict",
            Gpio => "gpio",
            Clrgpio => "clrgpio",
            Ingpio => "ingpio",
            Snd => "snd",
            Intsnd => "intsnd",
            Clrsnd => "clrsnd",
            Beat => "beat",
            Save => "save",
            Load => "load",
            Label => "label",
            Clear => "clear",
            Ptr => "ptr",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.keyword() == s)
    }

    /// Starts a block that must be matched while skipping.
    pub fn opens_block(self) -> bool {
        use Command::*;
        matches!(
            self,
            If | Ifu | Ifb | Iff | Ifs | While | Whileu | Whileb | Whilef | Whiles | For
        )
    }

    /// Recognised while the pass flag is set.
    pub fn is_skip_aware(self) -> bool {
        use Command::*;
        self.opens_block() || matches!(self, Else | Endif | Endwhile | Next)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// ## Operators
///
/// Decided once while classifying a line and carried with the operands.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // *** Binary arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // *** Comparison
    Eq,
    NotEq,
    LtEq,
    GtEq,
    Lt,
    Gt,

    // *** Float functions
    Sqrt,
    Rad,
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Abs,
    Neg,
}

impl Operator {
    pub fn from_token(s: &str) -> Option<Operator> {
        use Operator::*;
        Some(match s {
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "/" => Div,
            "%" => Mod,
            "&" => BitAnd,
            "|" => BitOr,
            "^" => BitXor,
            "<<" => Shl,
            ">>" => Shr,
            "==" => Eq,
            "!=" => NotEq,
            "<=" => LtEq,
            ">=" => GtEq,
            "<" => Lt,
            ">" => Gt,
            "sqrt" => Sqrt,
            "rad" => Rad,
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "ln" => Ln,
            "log" => Log,
            "abs" => Abs,
            "neg" => Neg,
            _ => return None,
        })
    }

    pub fn is_comparison(self) -> bool {
        use Operator::*;
        matches!(self, Eq | NotEq | LtEq | GtEq | Lt | Gt)
    }

    /// Float functions take a single operand.
    pub fn is_unary(self) -> bool {
        use Operator::*;
        matches!(self, Sqrt | Rad | Sin | Cos | Tan | Ln | Log | Abs | Neg)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        let s = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",
            Eq => "==",
            NotEq => "!=",
            LtEq => "<=",
            GtEq => ">=",
            Lt => "<",
            Gt => ">",
            Sqrt => "sqrt",
            Rad => "rad",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Ln => "ln",
            Log => "log",
            Abs => "abs",
            Neg => "neg",
        };
        write!(f, "{}", s)
    }
}
