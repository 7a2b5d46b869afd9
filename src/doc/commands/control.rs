/*!
# `JMP <t>`, `CALL <t>`, `RET`, `PUSH <src>`, `POP <d>`, `END`
## Purpose
Transfers control and keeps a scratch stack.

## Remarks
`jmp` continues at line `t`. `call` remembers the current line on the link
stack first and `ret` continues on the line after the remembered one. The
link stack is shared with loops and holds 16 entries; a call on a full
stack replaces the newest entry. `ret` with nothing remembered does nothing.

`push` writes `src` into the scratch stack, which grows down from the line
just above the input buffer. `pop` moves the newest entry into `d` and
clears its line. `pop` on an empty stack leaves `d` alone.

`end` stops the script.

## Example
```text
push 'first
push 'second
pop @20
print @20
second
```
*/
